// Example skimming a JSON file from disk: prints the top-level keys and the type of each value.
//
//   RUST_LOG=trace cargo run --example file_skim_demo --features std -- data.json

use minijson::{DecoderConfig, IoReader, JsonType, ObjectToken, ParseError, StreamDecoder};

fn skim(path: &str) -> Result<(), ParseError> {
    let file = std::fs::File::open(path).map_err(|e| {
        log::error!("cannot open {}: {}", path, e);
        ParseError::ReadError
    })?;
    let reader = IoReader::new(std::io::BufReader::new(file));
    let config = DecoderConfig::new().with_whitespace(true);
    let mut decoder = StreamDecoder::<_, 8>::with_config(reader, config);

    decoder.readcheck_object_start()?;
    if decoder.try_read_object_end()? {
        println!("(empty object)");
        return Ok(());
    }

    let mut key = [0u8; 48];
    loop {
        decoder.readcheck_string_start()?;
        let len = decoder.read_full_string(&mut key)?;
        decoder.read_object_key_separator()?;

        let kind = decoder.read_type()?;
        match kind {
            JsonType::String => decoder.skip_string()?,
            JsonType::Number => decoder.skip_number()?,
            JsonType::Array => decoder.skip_array()?,
            JsonType::Object => decoder.skip_object()?,
            JsonType::Null | JsonType::True | JsonType::False => {}
        }
        println!(
            "{:<48} {:?}",
            String::from_utf8_lossy(&key[..len.min(key.len())]),
            kind
        );

        if decoder.read_object_separator_or_end()? == ObjectToken::End {
            return Ok(());
        }
    }
}

fn main() {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: file_skim_demo <file.json>");
        std::process::exit(2);
    };

    if let Err(e) = skim(&path) {
        eprintln!("❌ {} (status {})", e, e.code());
        std::process::exit(1);
    }
}
