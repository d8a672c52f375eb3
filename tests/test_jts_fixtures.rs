// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Runs the JTS Topology Suite XML test dialect against the predicate
//! engine. Every `tests/fixtures/jts/*.xml` file is loaded; each `case`
//! carries WKT geometries `a`/`b` and a list of `op` elements naming a
//! predicate, its argument order and the expected boolean. Operation
//! names outside the supported set (e.g. `relate`, `getboundary`) are
//! skipped, as are cases whose WKT does not decode.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use planar_relate::{
    predicate_by_name, Bound, Collection, Geometry, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Ring,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestRun {
    #[serde(rename = "case", default)]
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    #[serde(default)]
    desc: String,
    a: String,
    #[serde(default)]
    b: Option<String>,
    #[serde(rename = "test", default)]
    tests: Vec<TestBlock>,
}

#[derive(Debug, Deserialize)]
struct TestBlock {
    op: Op,
}

#[derive(Debug, Deserialize)]
struct Op {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@arg1", default)]
    arg1: String,
    #[serde(rename = "@arg2", default)]
    arg2: String,
    #[serde(rename = "$text", default)]
    expected: String,
}

fn coord(c: geo_types::Coord<f64>) -> Point {
    Point::new(c.x, c.y)
}

fn line_string(ls: geo_types::LineString<f64>) -> LineString {
    LineString(ls.0.into_iter().map(coord).collect())
}

fn ring(ls: geo_types::LineString<f64>) -> Ring {
    Ring(ls.0.into_iter().map(coord).collect())
}

fn polygon(p: geo_types::Polygon<f64>) -> Polygon {
    let (exterior, holes) = p.into_inner();
    Polygon::with_holes(ring(exterior), holes.into_iter().map(ring))
}

fn convert(g: geo_types::Geometry<f64>) -> Geometry {
    match g {
        geo_types::Geometry::Point(p) => Geometry::from(Point::new(p.x(), p.y())),
        geo_types::Geometry::Line(l) => {
            Geometry::from(LineString(vec![coord(l.start), coord(l.end)]))
        }
        geo_types::Geometry::LineString(ls) => Geometry::from(line_string(ls)),
        geo_types::Geometry::Polygon(p) => Geometry::from(polygon(p)),
        geo_types::Geometry::MultiPoint(mp) => Geometry::from(MultiPoint(
            mp.0.into_iter().map(|p| Point::new(p.x(), p.y())).collect(),
        )),
        geo_types::Geometry::MultiLineString(mls) => Geometry::from(MultiLineString(
            mls.0.into_iter().map(line_string).collect(),
        )),
        geo_types::Geometry::MultiPolygon(mp) => {
            Geometry::from(MultiPolygon(mp.0.into_iter().map(polygon).collect()))
        }
        geo_types::Geometry::GeometryCollection(gc) => {
            Geometry::from(Collection(gc.0.into_iter().map(convert).collect()))
        }
        geo_types::Geometry::Rect(r) => Geometry::from(Bound::new(
            Point::new(r.min().x, r.min().y),
            Point::new(r.max().x, r.max().y),
        )),
        geo_types::Geometry::Triangle(t) => {
            let [a, b, c] = t.to_array();
            Geometry::from(Polygon::new(Ring(vec![
                coord(a),
                coord(b),
                coord(c),
                coord(a),
            ])))
        }
    }
}

/// Decode a WKT fragment, tolerating the newlines and indentation JTS
/// files carry inside geometry elements. `None` for anything the decoder
/// cannot represent (e.g. empty points), which skips the case.
fn parse_wkt(text: &str) -> Option<Geometry> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }
    let parsed = wkt::Wkt::<f64>::from_str(&normalized).ok()?;
    let geo: geo_types::Geometry<f64> = parsed.try_into().ok()?;
    Some(convert(geo))
}

fn parse_expected(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}

fn run_fixture_file(path: &Path, failures: &mut Vec<String>) {
    let data = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let run: TestRun = quick_xml::de::from_str(&data)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));

    for case in &run.cases {
        let Some(geom_a) = parse_wkt(&case.a) else {
            continue;
        };
        let geom_b = case.b.as_deref().and_then(parse_wkt);

        for test in &case.tests {
            let op = &test.op;
            let Some(predicate) = predicate_by_name(&op.name) else {
                continue;
            };

            let resolve = |arg: &str| -> Option<&Geometry> {
                if arg.eq_ignore_ascii_case("a") {
                    Some(&geom_a)
                } else if arg.eq_ignore_ascii_case("b") {
                    geom_b.as_ref()
                } else {
                    None
                }
            };
            let (Some(arg1), Some(arg2)) = (resolve(&op.arg1), resolve(&op.arg2)) else {
                continue;
            };

            let expected = parse_expected(&op.expected);
            let actual = predicate(arg1, arg2);
            if actual != expected {
                failures.push(format!(
                    "{}: case '{}': {}({}, {}) = {}, expected {}",
                    path.display(),
                    case.desc,
                    op.name,
                    op.arg1,
                    op.arg2,
                    actual,
                    expected
                ));
            }
        }
    }
}

#[test]
fn jts_fixture_corpus() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/jts");
    let Ok(entries) = fs::read_dir(&dir) else {
        eprintln!("no JTS fixtures under {}; skipping", dir.display());
        return;
    };

    let mut files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "xml"))
        .collect();
    files.sort();

    if files.is_empty() {
        eprintln!("no JTS fixtures under {}; skipping", dir.display());
        return;
    }

    let mut failures = Vec::new();
    for file in &files {
        run_fixture_file(file, &mut failures);
    }

    assert!(
        failures.is_empty(),
        "{} fixture mismatches:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
