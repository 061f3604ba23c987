/// Prompt template for person-name recognition. `{text}` is replaced with the resume text.
pub const PERSON_NER_PROMPT: &str = r#"Identify every person name that appears in the resume text below.

Rules:
- Return names exactly as they are written in the text (same spelling, same casing).
- List them in order of first appearance, without duplicates.
- Do not include company, school, product, or place names.
- If there are no person names, return an empty list.

Return JSON of the form: {"persons": ["First Last", ...]}

Resume text:
"""
{text}
""""#;
