mod client;
mod language;

pub use client::{DEFAULT_ENDPOINT, GoogleTranslator, Translation, Translator};
pub use language::{
    Language, SUPPORTED_LANGUAGES, describe_language, find_by_code, find_by_name,
    print_languages, resolve_language,
};
