use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde_json::Value;
use std::future::Future;

/// Public web endpoint used when the config does not name one.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Result of a single translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The translated text.
    pub text: String,
    /// Romanized pronunciation of the translated text.
    pub pronunciation: String,
    /// Source language as detected by the service.
    pub src: String,
    /// Destination language code that was requested.
    pub dest: String,
}

/// A translation backend.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        dest: &str,
    ) -> impl Future<Output = Result<Translation>> + Send;
}

/// Client for the Google Translate web endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(&self, text: &str, dest: &str) -> Result<Url> {
        let base = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );

        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest),
                ("dt", "t"),
                ("dt", "rm"),
                ("q", text),
            ],
        )
        .with_context(|| format!("Invalid translation endpoint: {}", self.endpoint))
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}

impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, dest: &str) -> Result<Translation> {
        let url = self.request_url(text, dest)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to translation endpoint: {}",
                    self.endpoint
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation request failed with status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read translation response")?;

        parse_response(&body, dest)
    }
}

/// Parses the nested-array body returned by `translate_a/single`.
///
/// `data[0]` holds one `[translated, original, ...]` segment per sentence,
/// followed by a transliteration row `[null, null, target, source]` when
/// romanization was requested. `data[2]` is the detected source language.
fn parse_response(body: &str, dest: &str) -> Result<Translation> {
    let data: Value =
        serde_json::from_str(body).context("Failed to parse translation response")?;

    let segments = data
        .get(0)
        .and_then(Value::as_array)
        .context("Unexpected translation response: missing sentence list")?;

    let mut text = String::new();
    let mut pronunciation = None;

    for segment in segments.iter().filter_map(Value::as_array) {
        if let Some(chunk) = segment.first().and_then(Value::as_str) {
            text.push_str(chunk);
        } else if pronunciation.is_none() {
            pronunciation = segment
                .get(2)
                .and_then(Value::as_str)
                .filter(|p| !p.is_empty())
                .map(str::to_string);
        }
    }

    let src = data
        .get(2)
        .and_then(Value::as_str)
        .context("Unexpected translation response: missing source language")?
        .to_string();

    Ok(Translation {
        pronunciation: pronunciation.unwrap_or_else(|| text.clone()),
        text,
        src,
        dest: dest.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_response_single_sentence() {
        let body = r#"[[["Hello","Hola",null,null,10]],null,"es",null,null,null,null,[]]"#;
        let translation = parse_response(body, "en").unwrap();

        assert_eq!(translation.text, "Hello");
        assert_eq!(translation.src, "es");
        assert_eq!(translation.dest, "en");
    }

    #[test]
    fn test_parse_response_joins_sentences() {
        let body = concat!(
            r#"[[["Good morning. ","Buenos días. ",null,null,10],"#,
            r#"["How are you?","¿Cómo estás?",null,null,10]],null,"es"]"#
        );
        let translation = parse_response(body, "en").unwrap();

        assert_eq!(translation.text, "Good morning. How are you?");
    }

    #[test]
    fn test_parse_response_target_romanization() {
        let body = r#"[[["こんにちは","hello",null,null,10],[null,null,"Kon'nichiwa",null]],null,"en"]"#;
        let translation = parse_response(body, "ja").unwrap();

        assert_eq!(translation.text, "こんにちは");
        assert_eq!(translation.pronunciation, "Kon'nichiwa");
    }

    #[test]
    fn test_parse_response_pronunciation_falls_back_to_text() {
        let body = r#"[[["Hello","Hola",null,null,10],[null,null,null,"ˈōlə"]],null,"es"]"#;
        let translation = parse_response(body, "en").unwrap();

        assert_eq!(translation.pronunciation, "Hello");
    }

    #[test]
    fn test_parse_response_invalid_json() {
        assert!(parse_response("<html>", "en").is_err());
    }

    #[test]
    fn test_parse_response_missing_source() {
        let body = r#"[[["Hello","Hola",null,null,10]]]"#;
        let err = parse_response(body, "en").unwrap_err();
        assert!(err.to_string().contains("source language"));
    }

    #[test]
    fn test_request_url_encodes_query() {
        let translator = GoogleTranslator::new("https://example.test/".to_string());
        let url = translator.request_url("a b&c", "zh-cn").unwrap();

        assert_eq!(url.path(), "/translate_a/single");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("tl".to_string(), "zh-cn".to_string())));
        assert!(pairs.contains(&("q".to_string(), "a b&c".to_string())));
        assert_eq!(pairs.iter().filter(|(k, _)| k == "dt").count(), 2);
    }

    #[test]
    fn test_request_url_rejects_bad_endpoint() {
        let translator = GoogleTranslator::new("not a url".to_string());
        assert!(translator.request_url("hi", "en").is_err());
    }

    #[tokio::test]
    async fn test_translate_sends_query_and_parses_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("client", "gtx"))
            .and(query_param("sl", "auto"))
            .and(query_param("tl", "ja"))
            .and(query_param("q", "good morning"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[[["おはよう","good morning",null,null,10],[null,null,"Ohayō",null]],null,"en"]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(server.uri());
        let translation = translator.translate("good morning", "ja").await.unwrap();

        assert_eq!(
            translation,
            Translation {
                text: "おはよう".to_string(),
                pronunciation: "Ohayō".to_string(),
                src: "en".to_string(),
                dest: "ja".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_translate_error_status_includes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
            .expect(1)
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(server.uri());
        let err = translator.translate("hola", "en").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("Too Many Requests"));
    }

    #[tokio::test]
    async fn test_translate_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(server.uri());
        let err = translator.translate("hola", "en").await.unwrap_err();

        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_translate_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let translator = GoogleTranslator::new(server.uri());
        let err = translator.translate("hola", "en").await.unwrap_err();

        assert!(err.to_string().contains("Failed to parse translation response"));
    }

    #[tokio::test]
    async fn test_translate_connection_failure_names_endpoint() {
        let translator = GoogleTranslator::new("http://127.0.0.1:1".to_string());
        let err = translator.translate("hola", "en").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Failed to connect to translation endpoint"));
        assert!(message.contains("http://127.0.0.1:1"));
    }
}
