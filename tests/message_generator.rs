use httpsuite::{HeaderFields, Request, Response};
use rand::Rng;
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

const METHODS: [&str; 6] = ["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS"];
const PROTOCOLS: [&str; 2] = ["HTTP/1.0", "HTTP/1.1"];
const REASONS: [&str; 4] = ["OK", "Not Found", "Internal Server Error", "I'm a teapot"];

fn random_word(rng: &mut Xoshiro256PlusPlus, alphabet: &[u8], min: usize, max: usize) -> String {
    let length = rng.random_range(min..=max);

    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

fn random_headers(rng: &mut Xoshiro256PlusPlus) -> HeaderFields {
    let mut headers = HeaderFields::new();

    for _ in 0..rng.random_range(0..8) {
        let name = random_word(rng, b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-", 1, 16);
        // Values may contain spaces and colons but never start with a space.
        let value = format!(
            "{}{}",
            random_word(rng, b"abcdefghij0123456789", 1, 1),
            random_word(rng, b"abcdefghij0123456789 :;=/", 0, 40)
        );

        headers.insert(name.into(), value.into());
    }

    headers
}

fn random_body(rng: &mut Xoshiro256PlusPlus) -> String {
    random_word(rng, b"abcdefghijklmnopqrstuvwxyz0123456789 {}\":,", 0, 200)
}

pub fn generate_requests(count: u64) -> Vec<Request> {
    (0..count)
        .map(|round| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(round);

            let method = METHODS[rng.random_range(0..METHODS.len())];
            let target = format!("/{}", random_word(&mut rng, b"abcdefgh/?=&", 0, 30));
            let protocol = PROTOCOLS[rng.random_range(0..PROTOCOLS.len())];
            let headers = random_headers(&mut rng);
            let body = random_body(&mut rng);

            Request::new(method, target, protocol)
                .with_headers(headers)
                .with_body(body)
        })
        .collect()
}

pub fn generate_responses(count: u64) -> Vec<Response> {
    (0..count)
        .map(|round| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(round);

            let protocol = PROTOCOLS[rng.random_range(0..PROTOCOLS.len())];
            let status: u16 = rng.random_range(100..600);
            let reason = REASONS[rng.random_range(0..REASONS.len())];
            let headers = random_headers(&mut rng);
            let body = random_body(&mut rng);

            Response::new(protocol, status, reason)
                .with_headers(headers)
                .with_body(body)
        })
        .collect()
}
