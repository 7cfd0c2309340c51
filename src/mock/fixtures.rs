//! 固定样例数据

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::analysis::{ImprovementPlan, KnowledgePoint, PatternTrend, StudentErrorPattern};
use crate::models::homework::{
    GradingError, HomeworkSubmission, KnowledgePointScore, MasteryGrade, ProcessingStatus,
    StudyPlan,
};
use crate::models::{AiProvider, Student, Subject};

pub(crate) fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(crate) fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 样例学生
pub fn students() -> Vec<Student> {
    let student = |id: i64,
                   name: &str,
                   email: Option<&str>,
                   grade: &str,
                   class: &str,
                   created_at: DateTime<Utc>,
                   updated_at: DateTime<Utc>,
                   is_active: bool| Student {
        id,
        name: name.into(),
        email: email.map(Into::into),
        phone: Some(format!("1380013800{id}")),
        grade: grade.into(),
        class: Some(class.into()),
        student_number: Some(format!("202300{id}")),
        created_at,
        updated_at,
        is_active,
    };

    vec![
        student(
            1,
            "张小明",
            Some("xiaoming@example.com"),
            "初三",
            "3班",
            at(2023, 9, 1, 8, 0),
            at(2024, 1, 15, 10, 30),
            true,
        ),
        student(
            2,
            "李小红",
            Some("xiaohong@example.com"),
            "初三",
            "2班",
            at(2023, 9, 1, 8, 0),
            at(2024, 1, 14, 15, 20),
            true,
        ),
        student(
            3,
            "王小强",
            Some("xiaoqiang@example.com"),
            "初二",
            "1班",
            at(2023, 9, 5, 9, 15),
            at(2024, 1, 13, 11, 45),
            true,
        ),
        student(
            4,
            "刘小芳",
            None,
            "初一",
            "4班",
            at(2023, 9, 10, 10, 0),
            at(2024, 1, 12, 14, 20),
            false,
        ),
    ]
}

/// 样例错误模式
pub fn error_patterns() -> Vec<StudentErrorPattern> {
    vec![
        StudentErrorPattern {
            pattern_type: "计算错误".into(),
            frequency: 12,
            recent_occurrences: 8,
            trend: PatternTrend::Decreasing,
            description: "在基本四则运算中出现错误，主要集中在分数运算和负数处理上。".into(),
        },
        StudentErrorPattern {
            pattern_type: "概念理解错误".into(),
            frequency: 6,
            recent_occurrences: 4,
            trend: PatternTrend::Stable,
            description: "对函数的定义域和值域概念理解不清晰，经常混淆相关概念。".into(),
        },
        StudentErrorPattern {
            pattern_type: "解题步骤遗漏".into(),
            frequency: 9,
            recent_occurrences: 7,
            trend: PatternTrend::Increasing,
            description: "在解决复杂问题时经常跳过中间步骤，导致逻辑不完整。".into(),
        },
    ]
}

/// 按科目的改进计划，未知科目使用数学计划
pub fn improvement_plan(subject: &str) -> ImprovementPlan {
    match Subject::parse(subject) {
        Some(Subject::Physics) => ImprovementPlan {
            focus_areas: to_strings(&["力学基础", "运动学", "能量守恒"]),
            recommended_actions: to_strings(&[
                "复习牛顿三定律的基本概念",
                "练习匀速直线运动和加速运动问题",
                "通过实验加深对物理概念的理解",
                "多做综合性的力学计算题",
            ]),
            difficulty_level: "初级".into(),
            estimated_time_weeks: 8,
        },
        Some(Subject::English) => ImprovementPlan {
            focus_areas: to_strings(&["语法结构", "时态运用", "词汇积累"]),
            recommended_actions: to_strings(&[
                "每日背诵20个新单词",
                "练习现在时、过去时和将来时的用法",
                "阅读英文短文并总结语法要点",
                "参加英语口语练习活动",
            ]),
            difficulty_level: "简单".into(),
            estimated_time_weeks: 4,
        },
        Some(Subject::Math) | None => ImprovementPlan {
            focus_areas: to_strings(&["基础代数", "方程求解", "函数概念"]),
            recommended_actions: to_strings(&[
                "每日完成10道基础代数运算练习题",
                "观看函数概念相关的教学视频",
                "参加每周的数学辅导课程",
                "建立错题本，记录和分析错误原因",
            ]),
            difficulty_level: "中等".into(),
            estimated_time_weeks: 6,
        },
    }
}

/// 样例知识点掌握度
pub fn knowledge_points() -> Vec<KnowledgePoint> {
    let rows: [(i64, &str, &str, f64, u32); 15] = [
        (1, "一元一次方程", "math", 75.0, 15),
        (2, "二次函数", "math", 60.0, 14),
        (3, "三角函数", "math", 45.0, 13),
        (4, "概率统计", "math", 85.0, 16),
        (5, "平面几何", "math", 70.0, 12),
        (6, "牛顿运动定律", "physics", 80.0, 15),
        (7, "电磁感应", "physics", 55.0, 14),
        (8, "波动光学", "physics", 40.0, 13),
        (9, "热力学", "physics", 65.0, 16),
        (10, "原子物理", "physics", 35.0, 11),
        (11, "现在时态", "english", 90.0, 15),
        (12, "过去时态", "english", 75.0, 14),
        (13, "条件语句", "english", 50.0, 13),
        (14, "被动语态", "english", 60.0, 16),
        (15, "阅读理解", "english", 85.0, 12),
    ];

    rows.into_iter()
        .map(|(id, name, subject, mastery_level, d)| KnowledgePoint {
            id,
            name: name.into(),
            subject: subject.into(),
            mastery_level,
            last_updated: day(2024, 1, d),
        })
        .collect()
}

/// 样例作业历史
pub fn homework_history() -> Vec<HomeworkSubmission> {
    use AiProvider::{Kimi, Qwen};
    use ProcessingStatus::{Completed, Failed, Pending};
    use Subject::{English, Math, Physics};

    let rows: [(&str, &str, Subject, AiProvider, DateTime<Utc>, ProcessingStatus, Option<f64>, &str); 8] = [
        ("1", "数学作业_第三章.jpg", Math, Qwen, at(2024, 1, 15, 14, 30), Completed, Some(85.0), "math_homework_3.jpg"),
        ("2", "物理实验报告.jpg", Physics, Kimi, at(2024, 1, 14, 10, 15), Completed, Some(92.0), "physics_report.jpg"),
        ("3", "英语作文_环保主题.jpg", English, Qwen, at(2024, 1, 13, 16, 45), Completed, Some(78.0), "english_essay.jpg"),
        ("4", "数学练习册_第四章.jpg", Math, Qwen, at(2024, 1, 12, 9, 20), Pending, None, "math_homework_4.jpg"),
        ("5", "物理作业_力学部分.jpg", Physics, Kimi, at(2024, 1, 11, 11, 30), Failed, None, "physics_mechanics.jpg"),
        ("6", "英语阅读理解练习.jpg", English, Qwen, at(2024, 1, 10, 15, 0), Completed, Some(88.0), "english_reading.jpg"),
        ("7", "数学竞赛题目.jpg", Math, Kimi, at(2024, 1, 9, 13, 45), Completed, Some(95.0), "math_competition.jpg"),
        ("8", "物理概念题集.jpg", Physics, Qwen, at(2024, 1, 8, 8, 30), Completed, Some(82.0), "physics_concepts.jpg"),
    ];

    rows.into_iter()
        .map(
            |(id, file_name, subject, provider, submitted_at, status, score, stored)| {
                HomeworkSubmission {
                    id: id.into(),
                    file_name: file_name.into(),
                    subject,
                    provider,
                    submitted_at,
                    processing_status: status,
                    grade_score: score,
                    file_url: Some(format!("/uploads/{stored}")),
                    analysis_id: (status == Completed).then(|| format!("analysis_{id}")),
                }
            },
        )
        .collect()
}

/// 批改结果中的错题
pub fn grading_errors() -> Vec<GradingError> {
    vec![
        GradingError {
            question_number: 3,
            error_type: "计算错误".into(),
            reason: "在分式化简过程中，分母处理不当".into(),
            correct_answer: "x = 3".into(),
            explanation: "分式方程两边同时乘以分母的最小公倍数，然后化简求解。注意检验根是否为增根。"
                .into(),
            knowledge_point: None,
            difficulty_level: None,
        },
        GradingError {
            question_number: 7,
            error_type: "概念理解错误".into(),
            reason: "对二次函数开口方向判断错误".into(),
            correct_answer: "a > 0，开口向上".into(),
            explanation: "二次函数 y = ax² + bx + c 中，当 a > 0 时开口向上，当 a < 0 时开口向下。"
                .into(),
            knowledge_point: None,
            difficulty_level: None,
        },
    ]
}

/// 批改结果中的知识点
pub fn grading_knowledge_points() -> Vec<KnowledgePointScore> {
    vec![
        KnowledgePointScore {
            name: "分式方程".into(),
            score: 75.0,
            mastery_level: MasteryGrade::Fair,
            suggestion: "需要加强分式方程的解法练习，特别是增根的检验".into(),
            related_errors: Vec::new(),
        },
        KnowledgePointScore {
            name: "二次函数".into(),
            score: 68.0,
            mastery_level: MasteryGrade::Fair,
            suggestion: "需要复习二次函数的基本性质，包括开口方向、对称轴等".into(),
            related_errors: Vec::new(),
        },
        KnowledgePointScore {
            name: "因式分解".into(),
            score: 95.0,
            mastery_level: MasteryGrade::Excellent,
            suggestion: "掌握得很好，继续保持".into(),
            related_errors: Vec::new(),
        },
    ]
}

/// 批改结果中的改进计划
pub fn grading_plan() -> StudyPlan {
    StudyPlan {
        suggestions: to_strings(&[
            "重点复习分式方程的解法和增根检验",
            "加强二次函数基本性质的理解",
            "多做相关练习题巩固知识点",
            "注意计算过程的细心程度",
        ]),
        recommended_practice: to_strings(&["分式方程专项练习", "二次函数图像与性质", "因式分解综合题"]),
        focus_areas: to_strings(&["分式方程", "二次函数性质"]),
        estimated_study_time: Some("建议每天练习30分钟，持续1周".into()),
    }
}

pub const CHAT_REPLIES: [&str; 5] = [
    "我理解您的问题。让我为您详细解释一下这个概念...",
    "这是一个很好的问题！我们可以从以下几个角度来分析：1. 基础概念... 2. 实际应用... 3. 常见误区...",
    "根据您提供的信息，我建议您重点关注以下几个方面：首先，确保基础概念理解正确...",
    "让我用一个更简单的例子来解释这个问题。假设我们有...",
    "很好的练习！您的思路基本正确，但在第三步有个小问题...",
];

/// 文本生成候选，`subject` 缺省为"学习"
pub fn generated_texts(subject: &str) -> [String; 4] {
    [
        format!("这是一个关于{subject}的详细解答。首先，我们需要理解核心概念..."),
        "根据您的提示，我为您生成了以下内容：\n\n1. 问题分析\n2. 解决步骤\n3. 注意事项\n\n让我们逐一分析..."
            .to_string(),
        "这个问题可以通过以下方法解决：\n\n方法一：直接计算\n方法二：图形分析\n方法三：公式推导"
            .to_string(),
        "基于您的要求，我建议采用循序渐进的学习方法...".to_string(),
    ]
}
