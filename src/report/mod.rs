//! 批改报告渲染
//!
//! 将批改结果渲染为可打印的 HTML 页面，以及报告下载接口的纯文本摘要。

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::models::homework::{HomeworkAnalysis, MasteryGrade};

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 渲染完整的批改报告页面
pub fn render_analysis_html(analysis: &HomeworkAnalysis) -> String {
    let mut html = String::new();
    let grade = MasteryGrade::from_score(analysis.mastery_level);

    // write! 到 String 不会失败
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="utf-8">
<title>作业批改报告 - {id}</title>
<style>
body {{ font-family: sans-serif; margin: 2em; color: #333; }}
.score {{ font-size: 2em; font-weight: bold; }}
.error {{ border-left: 4px solid #e74c3c; padding-left: 1em; margin-bottom: 1em; }}
table {{ border-collapse: collapse; }}
td, th {{ border: 1px solid #ccc; padding: 4px 8px; }}
@media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
<h1>作业批改报告</h1>
<p>科目：{subject} ｜ 批改时间：{analyzed_at}</p>
<p class="score">{score} / {max_score}</p>
<p>正确 {correct} 题，错误 {errors} 题，掌握程度 {mastery:.0}%（{grade}）</p>
"#,
        id = escape_html(&analysis.id),
        subject = analysis.subject.display_name(),
        analyzed_at = analysis.analyzed_at.format("%Y-%m-%d %H:%M"),
        score = analysis.total_score,
        max_score = analysis.max_score,
        correct = analysis.correct_count,
        errors = analysis.error_count,
        mastery = analysis.mastery_level,
        grade = grade.label(),
    );

    if !analysis.errors.is_empty() {
        html.push_str("<h2>错题分析</h2>\n");
        for error in &analysis.errors {
            let _ = write!(
                html,
                r#"<div class="error">
<h3>第 {number} 题 · {error_type}</h3>
<p><strong>错误原因：</strong>{reason}</p>
<p><strong>正确答案：</strong>{answer}</p>
<p>{explanation}</p>
</div>
"#,
                number = error.question_number,
                error_type = escape_html(&error.error_type),
                reason = escape_html(&error.reason),
                answer = escape_html(&error.correct_answer),
                explanation = escape_html(&error.explanation),
            );
        }
    }

    if !analysis.knowledge_points.is_empty() {
        html.push_str("<h2>知识点掌握</h2>\n<table>\n<tr><th>知识点</th><th>得分</th><th>等级</th><th>建议</th></tr>\n");
        for kp in &analysis.knowledge_points {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&kp.name),
                kp.score,
                kp.mastery_level.label(),
                escape_html(&kp.suggestion),
            );
        }
        html.push_str("</table>\n");
    }

    if let Some(plan) = &analysis.improvement_plan {
        html.push_str("<h2>改进计划</h2>\n");
        push_list(&mut html, "学习建议", &plan.suggestions);
        push_list(&mut html, "推荐练习", &plan.recommended_practice);
        push_list(&mut html, "重点领域", &plan.focus_areas);
        if let Some(time) = &plan.estimated_study_time {
            let _ = writeln!(html, "<p>{}</p>", escape_html(time));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_list(html: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(html, "<h3>{title}</h3>\n<ul>");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape_html(item));
    }
    html.push_str("</ul>\n");
}

/// 报告下载的纯文本摘要
pub fn render_text_summary(analysis_id: &str, now: DateTime<Utc>) -> String {
    format!(
        "作业批改报告\n\n分析ID: {analysis_id}\n生成时间: {}\n\n总体评价: 85分\n错题数量: 2题\n掌握程度: 良好\n\n详细分析请查看完整报告...",
        now.format("%Y/%m/%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::fixtures;
    use crate::models::homework::StudyPlan;
    use crate::models::Subject;

    fn analysis() -> HomeworkAnalysis {
        HomeworkAnalysis {
            id: "analysis_1".into(),
            submission_id: "sub_1".into(),
            subject: Subject::Math,
            total_score: 85.0,
            max_score: 100.0,
            error_count: 2,
            correct_count: 8,
            mastery_level: 82.0,
            analyzed_at: fixtures::at(2024, 1, 15, 14, 30),
            errors: fixtures::grading_errors(),
            knowledge_points: fixtures::grading_knowledge_points(),
            improvement_plan: Some(fixtures::grading_plan()),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("a > 0，开口向上"), "a &gt; 0，开口向上");
    }

    #[test]
    fn test_render_analysis_html() {
        let html = render_analysis_html(&analysis());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("85 / 100"));
        assert!(html.contains("科目：数学"));
        assert!(html.contains("第 7 题"));
        assert!(html.contains("a &gt; 0，开口向上"));
        assert!(html.contains("<td>因式分解</td><td>95</td><td>优秀</td>"));
        assert!(html.contains("建议每天练习30分钟"));
    }

    #[test]
    fn test_render_skips_empty_sections() {
        let mut slim = analysis();
        slim.errors.clear();
        slim.knowledge_points.clear();
        slim.improvement_plan = Some(StudyPlan {
            suggestions: vec!["<b>复习</b>".into()],
            recommended_practice: Vec::new(),
            focus_areas: Vec::new(),
            estimated_study_time: None,
        });

        let html = render_analysis_html(&slim);
        assert!(!html.contains("错题分析"));
        assert!(!html.contains("<table>"));
        assert!(!html.contains("推荐练习"));
        assert!(html.contains("<li>&lt;b&gt;复习&lt;/b&gt;</li>"));
    }

    #[test]
    fn test_text_summary() {
        let text = render_text_summary("analysis_9", fixtures::at(2024, 3, 1, 9, 5));
        assert!(text.starts_with("作业批改报告"));
        assert!(text.contains("分析ID: analysis_9"));
        assert!(text.contains("生成时间: 2024/03/01 09:05:00"));
    }
}
