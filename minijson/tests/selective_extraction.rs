// Selective extraction of a few fields from a larger document, skipping everything else.
use minijson::{
    ArrayToken, DecoderConfig, ObjectToken, ParseError, Reader, SliceReader, StreamDecoder,
};

use test_log::test;

// A more complex, "real-world" JSON document
const REAL_WORLD_JSON: &str = r#"
{
    "user_id": "u-12345",
    "username": "jdoe",
    "email": "jdoe@example.com",
    "is_active": true,
    "feature_flags": {
        "new_dashboard": true,
        "beta_access": false,
        "experimental_api": null
    },
    "products": [
        {
            "product_id": "p-001",
            "name": "Widget A",
            "stock": 99,
            "tags": ["gadget", "tech"]
        },
        {
            "product_id": "p-002",
            "name": "Widget B",
            "stock": 150,
            "tags": ["gadget", "classic"]
        },
        {
            "product_id": "p-003",
            "name": "Widget C",
            "stock": 42,
            "tags": ["new", "tech"]
        }
    ],
    "metadata": {
        "last_login": "2025-06-29T10:00:00Z",
        "notes": "A string with an escape sequence \n here."
    }
}
"#;

// Fields pulled out of the document
#[derive(Default, Debug)]
struct ExtractedData {
    email: Option<String>,
    second_product_id: Option<String>,
    second_product_stock: Option<i16>,
    new_dashboard_status: Option<bool>,
}

/// Visit each member of the object that comes next, with keys truncated to 32 bytes.
fn for_each_member<R: Reader, const N: usize>(
    d: &mut StreamDecoder<R, N>,
    mut visit: impl FnMut(&mut StreamDecoder<R, N>, &[u8]) -> Result<(), ParseError>,
) -> Result<(), ParseError> {
    d.readcheck_object_start()?;
    if d.try_read_object_end()? {
        return Ok(());
    }
    let mut key = [0u8; 32];
    loop {
        d.readcheck_string_start()?;
        let len = d.read_full_string(&mut key)?;
        d.read_object_key_separator()?;
        visit(d, &key[..len.min(key.len())])?;
        if d.read_object_separator_or_end()? == ObjectToken::End {
            return Ok(());
        }
    }
}

/// Visit each element of the array that comes next.
fn for_each_element<R: Reader, const N: usize>(
    d: &mut StreamDecoder<R, N>,
    mut visit: impl FnMut(&mut StreamDecoder<R, N>, usize) -> Result<(), ParseError>,
) -> Result<(), ParseError> {
    d.readcheck_array_start()?;
    if d.try_read_array_end()? {
        return Ok(());
    }
    let mut index = 0;
    loop {
        visit(d, index)?;
        index += 1;
        if d.read_array_separator_or_end()? == ArrayToken::End {
            return Ok(());
        }
    }
}

fn read_string<R: Reader, const N: usize>(
    d: &mut StreamDecoder<R, N>,
) -> Result<String, ParseError> {
    d.readcheck_string_start()?;
    let mut buf = [0u8; 64];
    let len = d.read_full_string(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf[..len.min(buf.len())]).into_owned())
}

fn extract<const N: usize>(
    json: &[u8],
    config: DecoderConfig,
) -> Result<ExtractedData, ParseError> {
    let mut d = StreamDecoder::<_, N>::with_config(SliceReader::new(json), config);
    let mut extracted = ExtractedData::default();

    for_each_member(&mut d, |d, key| match key {
        b"email" => {
            extracted.email = Some(read_string(d)?);
            Ok(())
        }
        b"feature_flags" => for_each_member(d, |d, key| {
            if key == b"new_dashboard" {
                extracted.new_dashboard_status = Some(d.readcheck_boolean()?);
                Ok(())
            } else {
                d.skip_value()
            }
        }),
        b"products" => for_each_element(d, |d, index| {
            if index != 1 {
                return d.skip_value();
            }
            for_each_member(d, |d, key| match key {
                b"product_id" => {
                    extracted.second_product_id = Some(read_string(d)?);
                    Ok(())
                }
                b"stock" => {
                    extracted.second_product_stock = Some(d.read_i16()?);
                    Ok(())
                }
                _ => d.skip_value(),
            })
        }),
        _ => d.skip_value(),
    })?;

    Ok(extracted)
}

fn compact(json: &str) -> String {
    // Only indentation, line breaks and the space after `:` or `,` are insignificant here
    json.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("")
        .replace("\": ", "\":")
        .replace(", \"", ",\"")
}

#[test]
fn test_selective_extraction() {
    let config = DecoderConfig::new().with_whitespace(true);
    let extracted = extract::<8>(REAL_WORLD_JSON.as_bytes(), config).unwrap();

    assert_eq!(extracted.email.as_deref(), Some("jdoe@example.com"));
    assert_eq!(extracted.second_product_id.as_deref(), Some("p-002"));
    assert_eq!(extracted.second_product_stock, Some(150));
    assert_eq!(extracted.new_dashboard_status, Some(true));
}

#[test]
fn test_selective_extraction_compact_minimum_window() {
    let json = compact(REAL_WORLD_JSON);
    let extracted = extract::<5>(json.as_bytes(), DecoderConfig::default()).unwrap();

    assert_eq!(extracted.email.as_deref(), Some("jdoe@example.com"));
    assert_eq!(extracted.second_product_id.as_deref(), Some("p-002"));
    assert_eq!(extracted.second_product_stock, Some(150));
    assert_eq!(extracted.new_dashboard_status, Some(true));
}

#[test]
fn test_pretty_document_rejected_without_whitespace_skipping() {
    let result = extract::<8>(REAL_WORLD_JSON.as_bytes(), DecoderConfig::default());
    assert_eq!(result.unwrap_err(), ParseError::UnknownType);
}
