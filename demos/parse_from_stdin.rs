use std::io;
use uri_parts::UriParts;

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match UriParts::parse(&line) {
            Ok(parts) => println!("{parts:#?}"),
            Err(e) => println!("Error: {e}"),
        };
    }
}
