// All LLM prompt constants for the Optimisation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for keyword suggestion.
pub const KEYWORD_SUGGEST_SYSTEM: &str =
    "You are a helpful assistant that extracts keywords from webpage content. \
    Provide the most relevant keywords or phrases.";

/// Keyword suggestion prompt template.
/// Replace: {num_keywords}, {title}, {h1}, {h2s}, {meta_description}, {content_excerpt}
pub const KEYWORD_SUGGEST_PROMPT_TEMPLATE: &str = r#"Analyze the following text elements from a webpage and extract the top {num_keywords} most relevant keywords or key phrases.
Focus primarily on the title, H1, H2s, and meta description. Consider the semantic meaning and context of the words.
Provide the keywords in order of relevance, one per line.

Title: {title}
H1: {h1}
H2s: {h2s}
Meta Description: {meta_description}

เพิ่มเนื้อหา: {content_excerpt}

คีย์เวิร์ด:"#;

/// System prompt for recommendation generation.
pub const RECOMMENDATION_SYSTEM: &str = "You are an SEO expert providing concise recommendations \
    for content optimization based on the provided keywords and content structure.";

/// Recommendation prompt template.
/// Replace: {main_keyword}, {secondary_keywords}, {faq_keywords},
///          {title}, {h1}, {h2s}, {meta_description}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"As an SEO expert, analyse the current webpage elements and the new set of target keywords.
Provide specific recommendations for optimising the Title, H1, H2s, Meta Description, and additional content to better align with the new main keyword.
Ensure that each H2 is clear, distinct, and covers a unique aspect related to the main search intent.
Avoid duplicating H2s and integrate keywords naturally, preferably having keywords early in each element such as Title, H1, H2, Meta Description. Each H2 should be in separate paragraph.
Preserve existing promotional content such as vpn softwares, antivirus softwares, AI softwares, presale, new, and meme tokens naturally within the content.
Include a comprehensive FAQ section using the provided FAQ keywords, ensure they are not duplicating with H2s.
You are generating SEO recommendations for a Thai content editor, all recommendations should be in Thai, but keywords and examples of keyword usage can be in English or Thai as appropriate.

The main keyword is "{main_keyword}". Ensure it's used in the Title, H1, and Meta Description.
Use the remaining keywords naturally throughout the content, placing FAQ-related keywords in the FAQ section.

Main Keyword: {main_keyword}
Other Main Keywords for H2s: {secondary_keywords}
FAQ Keywords: {faq_keywords}

Current Content Structure:
Title: {title}
H1: {h1}
H2s: {h2s}
Meta Description: {meta_description}

Provide your recommendations in the following format:
SEO Recommendations
Title: [Optimized Title]
H1 ที่แนะนำ: [Optimized H1]
Meta Description:
[Optimized Meta Description]
โครงสร้างเนื้อหา H2 ที่แนะนำ:
H2 - [New H2 based on other keywords]
H2 - [New H2 based on other keywords]
H2 - [New H2 based on other keywords]
ส่วน FAQ ที่แนะนำเพิ่มเติม:
[FAQ Question 1]?
[FAQ Question 2]?
[FAQ Question 3]?
[FAQ Question 4]?

คำแนะนำ:"#;

/// Fixed keyword-density guidance shown to the editor alongside every set of recommendations.
pub const KEYWORD_DENSITY_NOTICE: &str = "**สำคัญมาก:** คำแนะนำการใช้คีย์เวิร์ดในตำแหน่งสำคัญมีไว้ในรายละเอียดในบรีฟนี้แล้ว \
    เช่น Title, Intro, Meta Description, H1, H2 ต่างๆ. แต่ถ้าจะเพิ่มคีย์เวิร์ด ให้ใช้อย่างเป็นธรรมชาติประมาณไม่เกิน 20 ครั้งต่อ 5000 คำ \
    และใช้เทคนิคการปรับเปลี่ยนคำ (synonyms or variations) แทน";
