use std::env;

use sniffpack::compression::decompress;
use sniffpack::{Options, Result, decode_base64, detect};

fn main() -> Result<()> {
    let value = env::args().nth(1).unwrap_or_default();
    let raw = decode_base64(&value)?;
    let format = detect(&raw);
    println!("{} raw bytes, detected {format}", raw.len());

    let bytes = decompress(format, &raw, Options::default().max_output_len)?;
    println!("{} decompressed bytes", bytes.len());
    println!("{}", String::from_utf8_lossy(&bytes));

    Ok(())
}
