/// URL-style slug: lowercase ASCII letters and digits separated by single
/// hyphens. Non-ASCII text is transliterated first, so "Café" becomes `cafe`;
/// any other run of punctuation or whitespace, apostrophes included, becomes
/// one hyphen.
pub fn slugify(text: &str) -> String {
    ::slug::slugify(text)
}
