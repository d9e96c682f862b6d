//! Fixed questionnaire data: the interest areas with their question ids and
//! the instruction shown to respondents.

use crate::domain::model::{InterestArea, Question, QuestionId, QUESTIONS_PER_AREA};
use std::collections::HashSet;

pub const AREA_COUNT: usize = 29;

const AREA_TABLE: [(&str, [QuestionId; QUESTIONS_PER_AREA]); AREA_COUNT] = [
    ("Биология", [1, 30, 59, 88, 117]),
    ("География", [2, 31, 60, 89, 118]),
    ("Геология", [3, 32, 61, 90, 119]),
    ("Медицина", [4, 33, 62, 91, 120]),
    ("Легкая и пищевая промышленность", [5, 34, 63, 92, 121]),
    ("Физика", [6, 35, 64, 93, 122]),
    ("Химия", [7, 36, 65, 94, 123]),
    ("Техника, механика", [8, 37, 66, 95, 124]),
    ("Электротехника, радиотехника, электроника", [9, 38, 67, 96, 125]),
    ("Обработка материалов (дерево, металл и т.п.)", [10, 39, 68, 97, 126]),
    ("Информационные технологии", [11, 40, 69, 98, 127]),
    ("Психология", [12, 41, 70, 99, 128]),
    ("Строительство", [13, 42, 71, 100, 129]),
    ("Транспорт, авиация, морское дело", [14, 43, 72, 101, 130]),
    ("Военные специальности", [15, 44, 73, 102, 131]),
    ("История", [16, 45, 74, 103, 132]),
    ("Литература, филология", [17, 46, 75, 104, 133]),
    ("Журналистика, связи с общественностью, реклама", [18, 47, 76, 105, 134]),
    ("Социология, философия", [19, 48, 77, 106, 135]),
    ("Педагогика", [20, 49, 78, 107, 136]),
    ("Право, юриспруденция", [21, 50, 79, 108, 137]),
    ("Сфера обслуживания", [22, 51, 80, 109, 138]),
    ("Математика", [23, 52, 81, 110, 139]),
    ("Экономика, бизнес", [24, 53, 82, 111, 140]),
    ("Иностранные языки, лингвистика", [25, 54, 83, 112, 141]),
    ("Изобразительное искусство", [26, 55, 84, 113, 142]),
    ("Сценическое искусство", [27, 56, 85, 114, 143]),
    ("Музыка", [28, 57, 86, 115, 144]),
    ("Физкультура, спорт", [29, 58, 87, 116, 145]),
];

pub const INSTRUCTION: &str = "Инструкция: Вам предстоит оценить свои интересы в пределах 29 направлений.
Выберите один из пяти возможных вариантов. По каждому направлению можно набрать от -10 до 10 баллов.
Набранные от -10 до -5 баллов свидетельствуют о явном отрицании интереса к направлению, -5-0 баллов - отсутствие интереса,
1-3 балла - слабый интерес, 4-6 баллов - средне выраженный интерес, 7-10 баллов - ярко выраженный интерес.";

pub fn interest_areas() -> Vec<InterestArea> {
    AREA_TABLE
        .iter()
        .map(|(name, question_ids)| InterestArea {
            name: (*name).to_string(),
            question_ids: *question_ids,
        })
        .collect()
}

/// Area question ids that have no matching entry in the loaded catalog,
/// in area order. Areas still score these ids; the report is diagnostic only.
pub fn missing_question_ids(areas: &[InterestArea], questions: &[Question]) -> Vec<QuestionId> {
    let known: HashSet<QuestionId> = questions.iter().map(|q| q.id).collect();
    areas
        .iter()
        .flat_map(|area| area.question_ids.iter().copied())
        .filter(|id| !known.contains(id))
        .collect()
}
