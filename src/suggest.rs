use anyhow::{Context, Result};

use crate::board::GuessBatch;

/// Client for the word suggestion service.
#[derive(Clone, Debug)]
pub struct SuggestClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SuggestClient {
    pub fn new(endpoint: impl Into<String>) -> SuggestClient {
        SuggestClient {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Posts the batch as form-encoded `word=codes` pairs and decodes
    /// the reply, a JSON list of candidate words in service order.
    pub async fn fetch(&self, batch: &GuessBatch) -> Result<Vec<String>> {
        let response = self
            .http
            .post(&self.endpoint)
            .form(batch)
            .send()
            .await
            .with_context(|| format!("requesting suggestions from {}", self.endpoint))?;

        let words = response
            .error_for_status()
            .context("suggestion service rejected the request")?
            .json::<Vec<String>>()
            .await
            .context("decoding the suggestion list")?;

        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn board_with(letters: &str) -> Board {
        let mut board = Board::new(5, 5);
        for letter in letters.chars() {
            board.fill(letter);
        }
        board
    }

    #[tokio::test]
    async fn posts_the_batch_and_keeps_the_response_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/get_suggestions"))
            .and(body_string_contains("hello=BBBBB"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!(["apple", "mango"])),
            )
            .mount(&server)
            .await;

        let client = SuggestClient::new(format!("{}/get_suggestions", server.uri()));
        let words = client.fetch(&board_with("hello").collect()).await.unwrap();

        assert_eq!(words, vec!["apple", "mango"]);
    }

    #[tokio::test]
    async fn sends_one_pair_per_guess_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("words=BBBBB"))
            .and(body_string_contains("songs=BBBBB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = SuggestClient::new(server.uri());
        let words = client
            .fetch(&board_with("wordssongs").collect())
            .await
            .unwrap();

        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn a_malformed_reply_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a json list"))
            .mount(&server)
            .await;

        let client = SuggestClient::new(server.uri());
        assert!(client.fetch(&board_with("hello").collect()).await.is_err());
    }

    #[tokio::test]
    async fn a_server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SuggestClient::new(server.uri());
        assert!(client.fetch(&board_with("hello").collect()).await.is_err());
    }
}
