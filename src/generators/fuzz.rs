// Fuzz Harness Generator
//
// Emits a complete Go `_test.go` file with one native fuzz function per
// ParameterSpec. Each function seeds its corpus with boundary and
// off-by-one values for the declared type, then hands control to the Go
// fuzzing engine with a body that only consumes the input.
//
// Seed corpus per type (in emission order):
//   string/enum: "", "a", L-1 (L > 1), L and L+1 (L > 0), extra seeds
//   int:         min, max, min-1, max+1, 0
//   uint:        0, min-1 (min > 0), min, max, max+1
//   float:       min, max, min-1, max+1, 0
//
// Arithmetic on bounds wraps like Go's fixed-width integers.

use std::collections::HashSet;
use std::io::{self, Write};

use crate::golang;
use crate::models::{ParamType, ParameterSpec};

/// Prefix that makes `go test` treat a function as a fuzz target
pub const FUZZ_PREFIX: &str = "Fuzz";

/// Package clause of the generated file
pub const HARNESS_PACKAGE: &str = "boundaryguard_test";

/// Build the harness in memory
pub fn generate_harness(specs: &[ParameterSpec]) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec<u8> cannot fail
    let _ = write_harness(&mut buf, specs);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Stream the harness to `w`, one fuzz function at a time
pub fn write_harness<W: Write>(w: &mut W, specs: &[ParameterSpec]) -> io::Result<()> {
    writeln!(w, "package {}", HARNESS_PACKAGE)?;
    writeln!(w)?;
    writeln!(w, "import (")?;
    writeln!(w, "\t\"testing\"")?;
    writeln!(w, ")")?;

    let mut used = HashSet::new();
    for spec in specs {
        let name = unique_name(fuzz_func_name(&spec.name), &mut used);
        writeln!(w)?;
        write_fuzz_func(w, &name, spec)?;
    }
    Ok(())
}

/// Convert a parameter name into a fuzz function name.
///
/// The first character of the name and of every run following a separator
/// is upper-cased; separators (anything outside Go's letter and digit
/// classes) are dropped.
/// `user_name` -> `FuzzUserName`, `DB.host` -> `FuzzDBHost`.
pub fn fuzz_func_name(name: &str) -> String {
    let mut out = String::from(FUZZ_PREFIX);
    let mut upper = true;
    for c in name.chars() {
        if !(golang::is_letter(c) || golang::is_digit(c)) {
            upper = true;
            continue;
        }
        if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn unique_name(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}{}", base, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn write_fuzz_func<W: Write>(w: &mut W, name: &str, spec: &ParameterSpec) -> io::Result<()> {
    writeln!(w, "func {}(f *testing.F) {{", name)?;
    let go_type = match spec.param_type {
        ParamType::String | ParamType::Enum => {
            write_string_seeds(w, spec)?;
            "string"
        }
        ParamType::Int => {
            write_int_seeds(w, spec)?;
            "int64"
        }
        ParamType::Uint => {
            write_uint_seeds(w, spec)?;
            "uint64"
        }
        ParamType::Float => {
            write_float_seeds(w, spec)?;
            "float64"
        }
    };
    writeln!(w, "\tf.Fuzz(func(t *testing.T, v {}) {{", go_type)?;
    writeln!(w, "\t\t_ = v")?;
    writeln!(w, "\t}})")?;
    writeln!(w, "}}")
}

fn write_string_seeds<W: Write>(w: &mut W, spec: &ParameterSpec) -> io::Result<()> {
    writeln!(w, "\tf.Add(\"\")")?;
    writeln!(w, "\tf.Add(\"a\")")?;
    let max = spec.max_len();
    if max > 1 {
        writeln!(w, "\tf.Add(string(make([]byte, {})))", max - 1)?;
    }
    if max > 0 {
        writeln!(w, "\tf.Add(string(make([]byte, {})))", max)?;
        writeln!(w, "\tf.Add(string(make([]byte, {})))", max.wrapping_add(1))?;
    }
    for seed in &spec.extra_seeds {
        writeln!(w, "\tf.Add({})", golang::quote(seed))?;
    }
    Ok(())
}

fn write_int_seeds<W: Write>(w: &mut W, spec: &ParameterSpec) -> io::Result<()> {
    let range = spec.bounds();
    for v in [
        range.min,
        range.max,
        range.min.wrapping_sub(1),
        range.max.wrapping_add(1),
        0,
    ] {
        writeln!(w, "\tf.Add(int64({}))", v)?;
    }
    Ok(())
}

fn write_uint_seeds<W: Write>(w: &mut W, spec: &ParameterSpec) -> io::Result<()> {
    let range = spec.bounds();
    writeln!(w, "\tf.Add(uint64(0))")?;
    if range.min > 0 {
        writeln!(w, "\tf.Add(uint64({}))", (range.min - 1) as u64)?;
    }
    let max = range.max as u64;
    for v in [range.min as u64, max, max.wrapping_add(1)] {
        writeln!(w, "\tf.Add(uint64({}))", v)?;
    }
    Ok(())
}

fn write_float_seeds<W: Write>(w: &mut W, spec: &ParameterSpec) -> io::Result<()> {
    let range = spec.bounds();
    let (min, max) = (range.min as f64, range.max as f64);
    for v in [min, max, min - 1.0, max + 1.0, 0.0] {
        writeln!(w, "\tf.Add(float64({}))", v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_normalization() {
        assert_eq!(fuzz_func_name("user_name"), "FuzzUserName");
        assert_eq!(fuzz_func_name("api-key"), "FuzzApiKey");
        assert_eq!(fuzz_func_name("DB.host"), "FuzzDBHost");
        assert_eq!(fuzz_func_name("username"), "FuzzUsername");
        assert_eq!(fuzz_func_name("x__2y"), "FuzzX2y");
        assert_eq!(fuzz_func_name(""), "Fuzz");
    }

    #[test]
    fn test_name_drops_numeric_symbols() {
        assert_eq!(fuzz_func_name("x\u{b2}"), "FuzzX");
        assert_eq!(fuzz_func_name("one\u{bd}half"), "FuzzOneHalf");
        assert_eq!(fuzz_func_name("caf\u{e9}_au_lait"), "FuzzCaf\u{e9}AuLait");

        let out = generate_harness(&[ParameterSpec::new("x\u{b2}", ParamType::String)]);
        assert!(out.contains("func FuzzX(f *testing.F) {"));
        assert!(!out.contains('\u{b2}'));
    }

    #[test]
    fn test_empty_specs_preamble_only() {
        let out = generate_harness(&[]);
        assert_eq!(out, "package boundaryguard_test\n\nimport (\n\t\"testing\"\n)\n");
    }

    #[test]
    fn test_string_seeds() {
        let spec = ParameterSpec::new("username", ParamType::String).with_length(0, 255);
        let out = generate_harness(&[spec]);
        assert!(out.contains("func FuzzUsername(f *testing.F) {"));
        assert!(out.contains("\tf.Add(\"\")\n"));
        assert!(out.contains("\tf.Add(\"a\")\n"));
        assert!(out.contains("make([]byte, 254)"));
        assert!(out.contains("make([]byte, 255)"));
        assert!(out.contains("make([]byte, 256)"));
        assert!(out.contains("f.Fuzz(func(t *testing.T, v string) {"));
    }

    #[test]
    fn test_string_max_len_one_skips_below() {
        let spec = ParameterSpec::new("c", ParamType::String).with_length(0, 1);
        let out = generate_harness(&[spec]);
        assert!(!out.contains("make([]byte, 0)"));
        assert!(out.contains("make([]byte, 1)"));
        assert!(out.contains("make([]byte, 2)"));
    }

    #[test]
    fn test_string_extra_seeds_quoted() {
        let spec = ParameterSpec::new("q", ParamType::String)
            .with_extra_seeds(["<script>", "line\nbreak"]);
        let out = generate_harness(&[spec]);
        assert!(out.contains("\tf.Add(\"<script>\")\n"));
        assert!(out.contains("\tf.Add(\"line\\nbreak\")\n"));
    }

    #[test]
    fn test_int_seeds_in_order() {
        let spec = ParameterSpec::new("age", ParamType::Int).with_range(0, 150);
        let out = generate_harness(&[spec]);
        let expected = "\tf.Add(int64(0))\n\tf.Add(int64(150))\n\tf.Add(int64(-1))\n\tf.Add(int64(151))\n\tf.Add(int64(0))\n";
        assert!(out.contains(expected), "{}", out);
        assert!(out.contains("v int64"));
    }

    #[test]
    fn test_uint_seeds() {
        let spec = ParameterSpec::new("port", ParamType::Uint).with_range(1, 65535);
        let out = generate_harness(&[spec]);
        let expected = "\tf.Add(uint64(0))\n\tf.Add(uint64(0))\n\tf.Add(uint64(1))\n\tf.Add(uint64(65535))\n\tf.Add(uint64(65536))\n";
        assert!(out.contains(expected), "{}", out);
    }

    #[test]
    fn test_uint_zero_min_has_no_below_seed() {
        let spec = ParameterSpec::new("n", ParamType::Uint).with_range(0, 10);
        let out = generate_harness(&[spec]);
        assert_eq!(out.matches("f.Add(").count(), 4);
    }

    #[test]
    fn test_float_seeds() {
        let spec = ParameterSpec::new("ratio", ParamType::Float).with_range(0, 1);
        let out = generate_harness(&[spec]);
        assert!(out.contains("float64(0)"));
        assert!(out.contains("float64(1)"));
        assert!(out.contains("float64(-1)"));
        assert!(out.contains("float64(2)"));
        assert!(out.contains("v float64"));
    }

    #[test]
    fn test_int_extremes_wrap() {
        let spec = ParameterSpec::new("big", ParamType::Int).with_range(i64::MIN, i64::MAX);
        let out = generate_harness(&[spec]);
        assert!(out.contains(&format!("int64({})", i64::MIN)));
        assert!(out.contains(&format!("int64({})", i64::MAX)));
    }

    #[test]
    fn test_duplicate_names_disambiguated() {
        let specs = vec![
            ParameterSpec::new("id", ParamType::String),
            ParameterSpec::new("ID", ParamType::String),
            ParameterSpec::new("id", ParamType::Int),
        ];
        let out = generate_harness(&specs);
        assert!(out.contains("func FuzzId(f"));
        assert!(out.contains("func FuzzID(f"));
        assert!(out.contains("func FuzzId2(f"));
    }

    #[test]
    fn test_streaming_matches_buffered() {
        let specs = vec![
            ParameterSpec::new("user_name", ParamType::String).with_length(0, 16),
            ParameterSpec::new("age", ParamType::Int).with_range(18, 99),
        ];
        let mut streamed = Vec::new();
        write_harness(&mut streamed, &specs).unwrap();
        assert_eq!(String::from_utf8(streamed).unwrap(), generate_harness(&specs));
    }

    #[test]
    fn test_functions_separated_by_blank_line() {
        let specs = vec![
            ParameterSpec::new("a", ParamType::String),
            ParameterSpec::new("b", ParamType::String),
        ];
        let out = generate_harness(&specs);
        assert!(out.contains(")\n\nfunc FuzzA("));
        assert!(out.contains("}\n\nfunc FuzzB("));
        assert!(out.ends_with("\t})\n}\n"));
    }
}
