//! API utilities for frontend-backend communication
//!
//! Thin helpers over `gloo_net` shared by the chat and upload models.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Send a prepared request and decode the JSON body
///
/// Non-2xx responses are reported as `"HTTP <status>"` without reading the body.
pub async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, String> {
    let resp = request.send().await.map_err(|e| e.to_string())?;
    read_json(resp).await
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Build an `application/x-www-form-urlencoded` body
pub fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_urlencode_plain() {
        assert_eq!(form_urlencode(&[("message", "Hola")]), "message=Hola");
    }

    #[test]
    fn test_form_urlencode_reserved_and_unicode() {
        assert_eq!(
            form_urlencode(&[("message", "Hola mundo & más=1")]),
            "message=Hola%20mundo%20%26%20m%C3%A1s%3D1"
        );
    }

    #[test]
    fn test_form_urlencode_multiple_pairs() {
        assert_eq!(form_urlencode(&[("a", "1"), ("b", "2")]), "a=1&b=2");
    }
}
