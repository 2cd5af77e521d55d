//! 评分服务 - 业务能力层

use crate::models::exam::Choice;
use crate::models::grade::{GradeResult, LetterGrade, Score};
use crate::services::validator::ValidSubmission;

/// 按位置比对答案并计算得分
///
/// 调用前答案数量已由校验保证与答案一致
pub fn score(answers: &[Choice], key: &[Choice]) -> Score {
    debug_assert_eq!(answers.len(), key.len());

    let correct_count = answers
        .iter()
        .zip(key)
        .filter(|(answer, expected)| answer == expected)
        .count();

    // 先乘后除，整数结果（90、80 等分界点）是精确的
    let percentage = if key.is_empty() {
        0.0
    } else {
        correct_count as f64 * 100.0 / key.len() as f64
    };

    Score {
        correct_count,
        percentage,
        letter_grade: LetterGrade::from_percentage(percentage),
    }
}

/// 给一份通过校验的答卷打分
pub fn grade_student(submission: &ValidSubmission<'_>, key: &[Choice]) -> GradeResult {
    let score = score(&submission.answers, key);
    GradeResult {
        student_id: submission.student_id.to_string(),
        student_name: submission.student_name.to_string(),
        correct_count: score.correct_count,
        total_questions: key.len(),
        percentage: score.percentage,
        letter_grade: score.letter_grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exam::Choice::*;

    const KEY: [Choice; 4] = [A, B, C, D];

    #[test]
    fn test_all_correct() {
        let result = score(&[A, B, C, D], &KEY);
        assert_eq!(result.correct_count, 4);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.letter_grade, LetterGrade::A);
    }

    #[test]
    fn test_one_correct() {
        let result = score(&[A, A, A, A], &KEY);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.percentage, 25.0);
        assert_eq!(result.letter_grade, LetterGrade::F);
    }

    #[test]
    fn test_percentage_matches_ratio() {
        let key = vec![A; 7];
        for correct in 0..=7 {
            let mut answers = vec![B; 7];
            for slot in answers.iter_mut().take(correct) {
                *slot = A;
            }
            let result = score(&answers, &key);
            assert_eq!(result.correct_count, correct);
            let expected = correct as f64 / 7.0 * 100.0;
            assert!((result.percentage - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_exact_boundary_is_higher_band() {
        // 9/10 正好 90%
        let key = vec![A; 10];
        let mut answers = vec![A; 9];
        answers.push(B);
        let result = score(&answers, &key);
        assert_eq!(result.percentage, 90.0);
        assert_eq!(result.letter_grade, LetterGrade::A);
    }

    #[test]
    fn test_grade_student_copies_identity() {
        let submission = ValidSubmission {
            student_id: "S001",
            student_name: "Ann",
            answers: vec![A, B, D, D],
        };
        let result = grade_student(&submission, &KEY);
        assert_eq!(result.student_id, "S001");
        assert_eq!(result.student_name, "Ann");
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.total_questions, 4);
        assert_eq!(result.percentage, 75.0);
        assert_eq!(result.letter_grade, LetterGrade::C);
    }
}
