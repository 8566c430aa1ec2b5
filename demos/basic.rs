#![allow(clippy::print_stdout)]

use urlcanon::{NormalizeOptions, normalize, normalize_with};

fn main() {
    for input in [
        "HTTP://examPle.cOm:80/a/./b/../c/?z=1&a=2#top",
        "http://Яндекс.рф",
        "192.168.0.1:8080/a//b",
        "http://user@pass:example.com",
    ] {
        match normalize(input) {
            Some(url) => println!("{input} -> {url}"),
            None => println!("{input} -> not a URL"),
        }
    }

    let options = NormalizeOptions::new()
        .keep_fragments()
        .with_query_pair("utm_source", "demo");
    println!(
        "{:?}",
        normalize_with("http://example.com/page?b=2#section", &options)
    ); // Some("http://example.com/page?b=2&utm_source=demo#section")
}
