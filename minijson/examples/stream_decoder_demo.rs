// Example walking a whole document through an 8-byte window

use minijson::{
    ArrayToken, JsonType, ObjectToken, ParseError, Reader, SliceReader, StreamDecoder,
};

fn print_string<R: Reader>(d: &mut StreamDecoder<R>, indent: usize) -> Result<(), ParseError> {
    // Long strings are shown truncated; the decoder still reports the full length
    let mut buf = [0u8; 24];
    let len = d.read_full_string(&mut buf)?;
    let shown = String::from_utf8_lossy(&buf[..len.min(buf.len())]);
    let marker = if len > buf.len() { "..." } else { "" };
    println!("{:indent$}📝 String: {:?}{} ({} bytes)", "", shown, marker, len);
    Ok(())
}

fn dump_value<R: Reader>(d: &mut StreamDecoder<R>, indent: usize) -> Result<(), ParseError> {
    match d.read_type()? {
        JsonType::Null => println!("{:indent$}⭕ Null", ""),
        JsonType::True => println!("{:indent$}✅ Bool: true", ""),
        JsonType::False => println!("{:indent$}✅ Bool: false", ""),
        JsonType::Number => {
            let mut buf = [0u8; 32];
            let len = d.read_number_as_string(&mut buf)?;
            println!(
                "{:indent$}🔢 Number: {}",
                "",
                String::from_utf8_lossy(&buf[..len])
            );
        }
        JsonType::String => print_string(d, indent)?,
        JsonType::Array => {
            println!("{:indent$}📋 StartArray", "");
            if !d.try_read_array_end()? {
                loop {
                    dump_value(d, indent + 2)?;
                    if d.read_array_separator_or_end()? == ArrayToken::End {
                        break;
                    }
                }
            }
            println!("{:indent$}📋 EndArray", "");
        }
        JsonType::Object => {
            println!("{:indent$}🏁 StartObject", "");
            if !d.try_read_object_end()? {
                loop {
                    d.readcheck_string_start()?;
                    print!("{:indent$}🔑 Key -> ", "", indent = indent + 2);
                    print_string(d, 0)?;
                    d.read_object_key_separator()?;
                    dump_value(d, indent + 4)?;
                    if d.read_object_separator_or_end()? == ObjectToken::End {
                        break;
                    }
                }
            }
            println!("{:indent$}🏁 EndObject", "");
        }
    }
    Ok(())
}

fn main() -> Result<(), ParseError> {
    println!("🚀 StreamDecoder Demo");
    println!("=====================");

    let json = br#"{"name":"hello\nworld","items":[1,2.5,true,null],"count":42,"notes":"a string that will not fit the display buffer"}"#;
    println!("📄 Input JSON: {}", String::from_utf8_lossy(json));
    println!("📏 Total size: {} bytes, window: 8 bytes", json.len());
    println!();

    let mut decoder = StreamDecoder::new(SliceReader::new(json));
    dump_value(&mut decoder, 2)?;

    println!();
    println!(
        "✅ Walked {} bytes without holding more than 8 at a time",
        decoder.reader().position()
    );
    Ok(())
}
