/// Derive a URL-safe slug from a work title.
///
/// Lowercases, transliterates the diacritics that show up in titles (Turkish
/// first, then the usual western European set), maps everything else that is
/// not ASCII alphanumeric to a hyphen, collapses runs and trims the edges.
/// Deterministic: the same title always produces the same slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.chars() {
        // Dotted capital I lowercases to "i" + combining dot; map it up front.
        let c = if c == 'İ' { 'i' } else { c };
        for lower in c.to_lowercase() {
            let mapped = transliterate(lower);
            if mapped.is_ascii_alphanumeric() {
                slug.push(mapped);
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
    }

    slug.trim_end_matches('-').to_string()
}

fn transliterate(c: char) -> char {
    match c {
        'ç' => 'c',
        'ğ' => 'g',
        'ı' => 'i',
        'ş' => 's',
        'â' | 'à' | 'á' | 'ä' | 'ã' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'î' | 'ì' | 'í' | 'ï' => 'i',
        'ô' | 'ò' | 'ó' | 'ö' | 'õ' => 'o',
        'û' | 'ù' | 'ú' | 'ü' => 'u',
        'ñ' => 'n',
        'ý' => 'y',
        other => other,
    }
}
