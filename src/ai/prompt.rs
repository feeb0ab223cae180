//! Prompt Construction
//!
//! Builds the system and user instructions for FAQ generation. The user
//! prompt embeds answer-structuring guidance (a one-sentence definition,
//! numbered key points, a concrete use-case statement) so generated answers
//! carry the substructure the formatting engine recognizes.

/// System instruction establishing the editor role
pub fn system_prompt() -> &'static str {
    "你是一个专业的内容编辑助手，负责生成 SEO 友好、易被 AI 模型引用的 FAQ 问答。"
}

/// User instruction for a topic, in the requested output language
pub fn user_prompt(topic: &str, language: &str) -> String {
    format!(
        "请为「{topic}」生成 3 条简洁的 FAQ，问题和回答都使用{language}。\n\
         每条回答按以下结构组织：先用一句话给出定义；然后用 1）2）3）的编号列出 2-3 个关键要点；\
         最后补充一句具体的价值或使用场景说明。\n\
         直接返回一个 JSON 数组，每个元素包含 question 和 answer 两个字段。\n\
         不要用 Markdown 代码块包裹，不要在 JSON 前后输出任何解释性文字。"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_names_topic_and_language() {
        let prompt = user_prompt("碳中和", "简体中文");
        assert!(prompt.contains("「碳中和」"));
        assert!(prompt.contains("简体中文"));
        assert!(prompt.contains("3 条"));
    }

    #[test]
    fn test_user_prompt_requests_pure_json() {
        let prompt = user_prompt("Rust", "简体中文");
        assert!(prompt.contains("JSON 数组"));
        assert!(prompt.contains("question"));
        assert!(prompt.contains("answer"));
        assert!(prompt.contains("不要用 Markdown 代码块包裹"));
    }

    #[test]
    fn test_user_prompt_embeds_structure_guidance() {
        let prompt = user_prompt("Rust", "简体中文");
        assert!(prompt.contains("定义"));
        assert!(prompt.contains("1）2）3）"));
        assert!(prompt.contains("使用场景"));
    }
}
