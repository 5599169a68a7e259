//! Language table and code/name resolution.

use anyhow::Result;

use crate::ui::Style;

/// A supported language: its code and human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

impl Language {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// Languages accepted by the translation backend, keyed by code.
///
/// Where two codes share a name, the first entry wins the reverse lookup.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::new("af", "Afrikaans"),
    Language::new("sq", "Albanian"),
    Language::new("am", "Amharic"),
    Language::new("ar", "Arabic"),
    Language::new("hy", "Armenian"),
    Language::new("az", "Azerbaijani"),
    Language::new("eu", "Basque"),
    Language::new("be", "Belarusian"),
    Language::new("bn", "Bengali"),
    Language::new("bs", "Bosnian"),
    Language::new("bg", "Bulgarian"),
    Language::new("ca", "Catalan"),
    Language::new("ceb", "Cebuano"),
    Language::new("ny", "Chichewa"),
    Language::new("zh-cn", "Chinese (Simplified)"),
    Language::new("zh-tw", "Chinese (Traditional)"),
    Language::new("co", "Corsican"),
    Language::new("hr", "Croatian"),
    Language::new("cs", "Czech"),
    Language::new("da", "Danish"),
    Language::new("nl", "Dutch"),
    Language::new("en", "English"),
    Language::new("eo", "Esperanto"),
    Language::new("et", "Estonian"),
    Language::new("tl", "Filipino"),
    Language::new("fi", "Finnish"),
    Language::new("fr", "French"),
    Language::new("fy", "Frisian"),
    Language::new("gl", "Galician"),
    Language::new("ka", "Georgian"),
    Language::new("de", "German"),
    Language::new("el", "Greek"),
    Language::new("gu", "Gujarati"),
    Language::new("ht", "Haitian Creole"),
    Language::new("ha", "Hausa"),
    Language::new("haw", "Hawaiian"),
    Language::new("he", "Hebrew"),
    Language::new("iw", "Hebrew"),
    Language::new("hi", "Hindi"),
    Language::new("hmn", "Hmong"),
    Language::new("hu", "Hungarian"),
    Language::new("is", "Icelandic"),
    Language::new("ig", "Igbo"),
    Language::new("id", "Indonesian"),
    Language::new("ga", "Irish"),
    Language::new("it", "Italian"),
    Language::new("ja", "Japanese"),
    Language::new("jw", "Javanese"),
    Language::new("kn", "Kannada"),
    Language::new("kk", "Kazakh"),
    Language::new("km", "Khmer"),
    Language::new("ko", "Korean"),
    Language::new("ku", "Kurdish (Kurmanji)"),
    Language::new("ky", "Kyrgyz"),
    Language::new("lo", "Lao"),
    Language::new("la", "Latin"),
    Language::new("lv", "Latvian"),
    Language::new("lt", "Lithuanian"),
    Language::new("lb", "Luxembourgish"),
    Language::new("mk", "Macedonian"),
    Language::new("mg", "Malagasy"),
    Language::new("ms", "Malay"),
    Language::new("ml", "Malayalam"),
    Language::new("mt", "Maltese"),
    Language::new("mi", "Maori"),
    Language::new("mr", "Marathi"),
    Language::new("mn", "Mongolian"),
    Language::new("my", "Myanmar (Burmese)"),
    Language::new("ne", "Nepali"),
    Language::new("no", "Norwegian"),
    Language::new("or", "Odia"),
    Language::new("ps", "Pashto"),
    Language::new("fa", "Persian"),
    Language::new("pl", "Polish"),
    Language::new("pt", "Portuguese"),
    Language::new("pa", "Punjabi"),
    Language::new("ro", "Romanian"),
    Language::new("ru", "Russian"),
    Language::new("sm", "Samoan"),
    Language::new("gd", "Scots Gaelic"),
    Language::new("sr", "Serbian"),
    Language::new("st", "Sesotho"),
    Language::new("sn", "Shona"),
    Language::new("sd", "Sindhi"),
    Language::new("si", "Sinhala"),
    Language::new("sk", "Slovak"),
    Language::new("sl", "Slovenian"),
    Language::new("so", "Somali"),
    Language::new("es", "Spanish"),
    Language::new("su", "Sundanese"),
    Language::new("sw", "Swahili"),
    Language::new("sv", "Swedish"),
    Language::new("tg", "Tajik"),
    Language::new("ta", "Tamil"),
    Language::new("te", "Telugu"),
    Language::new("th", "Thai"),
    Language::new("tr", "Turkish"),
    Language::new("uk", "Ukrainian"),
    Language::new("ur", "Urdu"),
    Language::new("ug", "Uyghur"),
    Language::new("uz", "Uzbek"),
    Language::new("vi", "Vietnamese"),
    Language::new("cy", "Welsh"),
    Language::new("xh", "Xhosa"),
    Language::new("yi", "Yiddish"),
    Language::new("yo", "Yoruba"),
    Language::new("zu", "Zulu"),
];

/// Looks up a language by code (case-insensitive).
pub fn find_by_code(code: &str) -> Option<Language> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
        .copied()
}

/// Looks up a language by name (case-insensitive).
pub fn find_by_name(name: &str) -> Option<Language> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Resolves a language code or name to a supported language.
///
/// The query is tried as a code first, then as a name.
///
/// # Errors
///
/// Returns an error naming the query if it matches neither a code nor a name.
pub fn resolve_language(query: &str) -> Result<Language> {
    let query = query.trim();
    find_by_code(query)
        .or_else(|| find_by_name(query))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "{query} is not present in supported languages.\n\n\
                 Run 'trans languages' to see all supported codes and names."
            )
        })
}

/// Returns `(name, code)` for a language reported by the backend.
///
/// Values outside the table are echoed back in both positions.
pub fn describe_language(code_or_name: &str) -> (String, String) {
    resolve_language(code_or_name).map_or_else(
        |_| (code_or_name.to_string(), code_or_name.to_string()),
        |lang| (lang.name.to_string(), lang.code.to_string()),
    )
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for lang in SUPPORTED_LANGUAGES {
        println!("  {:6} {}", Style::code(lang.code), Style::secondary(lang.name));
    }
}
