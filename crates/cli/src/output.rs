//! Rendering of records, color objects and per-item outcomes as JSON or text.

use crate::error::CliError;
use palette_core::{ColorError, ColorObject, ColorRecord};
use serde::Serialize;

/// One entry of a partial-success batch.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Outcome<'a> {
    Ok(&'a ColorObject),
    Error {
        index: usize,
        id: &'a str,
        error: String,
    },
}

impl<'a> Outcome<'a> {
    fn new(
        index: usize,
        record: &'a ColorRecord,
        result: &'a Result<ColorObject, ColorError>,
    ) -> Self {
        match result {
            Ok(obj) => Outcome::Ok(obj),
            Err(e) => Outcome::Error {
                index,
                id: &record.id,
                error: e.malformed_hex().to_string(),
            },
        }
    }
}

pub fn records(records: &[ColorRecord], json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    Ok(records
        .iter()
        .map(|r| format!("{}  {}  {}", r.id, r.hex, r.name))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn object_line(o: &ColorObject) -> String {
    format!(
        "{}  rgb({:3}, {:3}, {:3})  h={:6.2}  s={:.3}  v={:.3}  c={:.3}  luma={:.3}  {}",
        o.hex, o.red, o.green, o.blue, o.hue, o.saturation, o.value, o.chroma, o.luma, o.name
    )
}

pub fn objects(objects: &[ColorObject], json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(objects)?);
    }
    Ok(objects.iter().map(object_line).collect::<Vec<_>>().join("\n"))
}

/// Renders per-item results; `results` must line up with `records`.
pub fn outcomes(
    records: &[ColorRecord],
    results: &[Result<ColorObject, ColorError>],
    json: bool,
) -> Result<String, CliError> {
    let entries: Vec<Outcome<'_>> = records
        .iter()
        .zip(results)
        .enumerate()
        .map(|(i, (r, res))| Outcome::new(i, r, res))
        .collect();
    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }
    Ok(entries
        .iter()
        .map(|entry| match entry {
            Outcome::Ok(o) => object_line(o),
            Outcome::Error { index, id, error } => {
                format!("error  record {index} (id {id}): {error}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_core::transform_each;
    use serde_json::Value;

    fn sample() -> Vec<ColorRecord> {
        vec![
            ColorRecord::new("a1", "#FF0000", "Red"),
            ColorRecord::new("b2", "#FFF", "Broken"),
        ]
    }

    #[test]
    fn records_json_uses_document_fields() {
        let out = records(&sample(), true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["_id"], "a1");
        assert_eq!(value[1]["color"], "#FFF");
    }

    #[test]
    fn records_text_is_one_line_each() {
        let out = records(&sample(), false).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("a1  #FF0000  Red"));
    }

    #[test]
    fn objects_text_shows_channels_and_hue() {
        let objs = palette_core::transform_all(&sample()[..1]).unwrap();
        let out = objects(&objs, false).unwrap();
        assert!(out.contains("rgb(255,   0,   0)"), "got: {out}");
        assert!(out.contains("h=  0.00"), "got: {out}");
        assert!(out.ends_with("Red"));
    }

    #[test]
    fn outcomes_json_tags_status() {
        let recs = sample();
        let results = transform_each(&recs);
        let out = outcomes(&recs, &results, true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["status"], "ok");
        assert_eq!(value[0]["red"], 255);
        assert_eq!(value[1]["status"], "error");
        assert_eq!(value[1]["index"], 1);
        assert_eq!(value[1]["id"], "b2");
        assert!(value[1]["error"].as_str().unwrap().contains("#FFF"));
    }

    #[test]
    fn outcomes_text_marks_errors() {
        let recs = sample();
        let results = transform_each(&recs);
        let out = outcomes(&recs, &results, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("error  record 1 (id b2)"), "got: {}", lines[1]);
    }
}
