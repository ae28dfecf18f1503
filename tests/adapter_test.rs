//! Stdin bootstrap wired to the default handler registry

use fnbox::adapter::{Adapter, AdapterError, AdapterStyle};
use fnbox::config::{Config, HttpConfig};
use fnbox::handlers::github_hmac::{self, REJECTED_MESSAGE, VERIFIED_MESSAGE};
use fnbox::handlers::url_ping::FALLBACK_MESSAGE;
use fnbox::handlers::{EnvMap, HandlerError, HandlerRegistry};

struct Output {
    result: Result<(), AdapterError>,
    stdout: String,
    stderr: String,
}

fn registry() -> HandlerRegistry {
    let http = HttpConfig {
        system_proxy: false,
        ..HttpConfig::default()
    };
    HandlerRegistry::with_defaults(&http).unwrap()
}

async fn invoke(name: &str, style: AdapterStyle, stdin: &[u8], env: EnvMap) -> Output {
    let handler = registry().get(name).unwrap();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let result = Adapter::new(style)
        .run(handler.as_ref(), stdin, env, &mut stdout, &mut stderr)
        .await;

    Output {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[tokio::test]
async fn test_default_handler_falls_back_on_plain_text() {
    let config = Config::default();
    let out = invoke(
        &config.function.handler,
        config.function.style,
        b"hello\n",
        EnvMap::new(),
    )
    .await;

    assert!(out.result.is_ok());
    assert_eq!(out.stdout, format!("{}\n", FALLBACK_MESSAGE));
    assert!(out.stderr.is_empty());
}

#[tokio::test]
async fn test_echo_receives_multiline_input_intact() {
    let out = invoke(
        "echo",
        AdapterStyle::Passthrough,
        b"one\ntwo\nthree",
        EnvMap::new(),
    )
    .await;

    assert!(out.result.is_ok());
    assert_eq!(out.stdout, "Hello, Rust. You said: one\ntwo\nthree\n");
}

#[tokio::test]
async fn test_github_hmac_reads_headers_from_env() {
    let body = br#"{"action":"opened"}"#;
    let signature = github_hmac::sign(body, b"webhook-secret").unwrap();

    let env: EnvMap = [
        ("Http_X-Hub-Signature".to_string(), signature),
        ("secret_key".to_string(), "webhook-secret".to_string()),
    ]
    .into();
    let out = invoke("github-hmac", AdapterStyle::Passthrough, body, env).await;
    assert_eq!(out.stdout, format!("{}\n", VERIFIED_MESSAGE));

    let env: EnvMap = [
        ("Http_X-Hub-Signature".to_string(), "sha1=00".to_string()),
        ("secret_key".to_string(), "webhook-secret".to_string()),
    ]
    .into();
    let out = invoke("github-hmac", AdapterStyle::Passthrough, body, env).await;
    assert_eq!(out.stdout, format!("{}\n", REJECTED_MESSAGE));
}

#[tokio::test]
async fn test_handler_failure_styles() {
    let passthrough = invoke("github-hmac", AdapterStyle::Passthrough, b"{}", EnvMap::new()).await;
    assert!(matches!(
        passthrough.result,
        Err(AdapterError::Handler(HandlerError::MissingEnv(_)))
    ));
    assert!(passthrough.stdout.is_empty());
    assert!(passthrough.stderr.is_empty());

    let callback = invoke("github-hmac", AdapterStyle::Callback, b"{}", EnvMap::new()).await;
    assert!(callback.result.is_ok());
    assert!(callback.stdout.is_empty());
    assert_eq!(
        callback.stderr,
        "missing environment variable: Http_X-Hub-Signature\n"
    );
}

#[tokio::test]
async fn test_invalid_utf8_is_handler_error() {
    let out = invoke("url-ping", AdapterStyle::Passthrough, &[0xc3, 0x28], EnvMap::new()).await;
    assert!(matches!(
        out.result,
        Err(AdapterError::Handler(HandlerError::InvalidInput(_)))
    ));
}
