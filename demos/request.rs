use httpsuite::{Message, Request, Token};

fn main() -> anyhow::Result<()> {
    let body = serde_json::to_string(&serde_json::json!({"hello": "world"}))?;

    let request = Request::new("GET", "/", "HTTP/1.1")
        .with_headers([
            ("Host", Token::from("www.google.com")),
            ("Connection", Token::from("keep-alive")),
            ("Content-Length", Token::from(body.len())),
        ])
        .with_body(&body);

    let raw = format!(
        "GET / HTTP/1.1\r\nHost: www.google.com\r\nConnection: keep-alive\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let parsed = Request::parse(raw)?;

    println!("{}", request.to_pretty());
    println!();
    println!("{}", parsed.to_pretty());

    anyhow::ensure!(parsed == request, "parsed request differs from the built one");

    Ok(())
}
