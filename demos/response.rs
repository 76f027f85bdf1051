use httpsuite::{Message, Response, Token};

fn main() -> anyhow::Result<()> {
    let body = serde_json::to_string(&serde_json::json!({"hello": "world"}))?;

    let response = Response::new("HTTP/1.1", 200, "OK")
        .with_headers([
            ("Host", Token::from("www.google.com")),
            ("Connection", Token::from("keep-alive")),
            ("Content-Length", Token::from(body.len())),
        ])
        .with_body(&body);

    let mut raw = format!(
        "HTTP/1.1 200 OK\r\nHost: www.google.com\r\nConnection: keep-alive\r\nContent-Length: {}\r\n\r\n",
        body.len()
    )
    .into_bytes();
    raw.extend_from_slice(body.as_bytes());

    let parsed = Response::parse(raw)?;

    println!("{}", response.to_pretty());
    println!();
    println!("{}", parsed.to_pretty());

    anyhow::ensure!(parsed == response, "parsed response differs from the built one");

    Ok(())
}
