// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! OAuth 2.0 installed-app flow with a loopback redirect.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use url::Url;

use crate::config::GoogleConfig;
use crate::error::GcalError;
use crate::types::AccessToken;

/// Scope granting read/write access to the user's calendars.
pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

const PAGE_SUCCESS: &str = "<html><body>\
    <h1>Signed in</h1>\
    <p>You can close this window and return to the terminal.</p>\
    </body></html>";

const PAGE_FAILURE: &str = "<html><body>\
    <h1>Sign-in failed</h1>\
    <p>Return to the terminal for details.</p>\
    </body></html>";

/// Builds the consent page URL the user signs in on.
///
/// # Errors
///
/// Returns an error if the configured consent endpoint is not a valid URL.
pub fn consent_url(config: &GoogleConfig, state: &str) -> Result<Url, GcalError> {
    let redirect_uri = config.redirect_uri();
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", CALENDAR_SCOPE),
            ("state", state),
        ],
    )?;
    Ok(url)
}

/// Accepts connections on the loopback listener until the browser hits `/callback`,
/// and returns the authorization code.
///
/// Requests to any other path (browsers ask for `/favicon.ico`) are answered with 404
/// and ignored.
///
/// # Errors
///
/// Returns [`GcalError::Auth`] when the provider reports an error, the `state` does not
/// match, or no code is present.
pub async fn wait_for_callback(
    listener: &TcpListener,
    expected_state: &str,
) -> Result<String, GcalError> {
    loop {
        let (stream, _) = listener.accept().await?;
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader.read_line(&mut request_line).await?;
        let mut header = String::new();
        while reader.read_line(&mut header).await? > 2 {
            header.clear();
        }

        // Request line looks like: GET /callback?code=xxx&state=yyy HTTP/1.1
        let target = request_line.split_whitespace().nth(1).unwrap_or("/");
        let url = Url::parse(&format!("http://localhost{target}"))
            .map_err(|e| GcalError::Auth(format!("malformed redirect: {e}")))?;

        let mut stream = reader.into_inner();
        if url.path() != "/callback" {
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nConnection: close\r\n\r\n")
                .await?;
            continue;
        }

        let result = callback_code(&url, expected_state);
        let page = if result.is_ok() {
            PAGE_SUCCESS
        } else {
            PAGE_FAILURE
        };
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n{page}"
        );
        stream.write_all(response.as_bytes()).await?;
        stream.flush().await?;
        return result;
    }
}

fn callback_code(url: &Url, expected_state: &str) -> Result<String, GcalError> {
    let param = |name: &str| {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    };

    if let Some(error) = param("error") {
        return Err(GcalError::Auth(error));
    }
    if param("state").as_deref() != Some(expected_state) {
        return Err(GcalError::Auth("state mismatch in redirect".to_string()));
    }
    param("code").ok_or_else(|| GcalError::Auth("no code in redirect".to_string()))
}

/// Exchanges an authorization code for an access token.
///
/// # Errors
///
/// Returns [`GcalError::Auth`] when the token endpoint refuses the code.
pub async fn exchange_code(
    http: &reqwest::Client,
    config: &GoogleConfig,
    code: &str,
) -> Result<AccessToken, GcalError> {
    let redirect_uri = config.redirect_uri();
    let mut params = vec![
        ("code", code),
        ("client_id", config.client_id.as_str()),
        ("redirect_uri", redirect_uri.as_str()),
        ("grant_type", "authorization_code"),
    ];
    if !config.client_secret.is_empty() {
        params.push(("client_secret", config.client_secret.as_str()));
    }

    let resp = http.post(&config.token_url).form(&params).send().await?;
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        return Err(GcalError::Auth(format!(
            "token exchange failed ({status}): {}",
            text.trim()
        )));
    }

    Ok(resp.json().await?)
}
