// SPDX-License-Identifier: MIT
//
// tinct — a terminal color-harmony palette generator.
//
// This is the main binary that wires together the crates:
//
//   tinct-color   → hex parsing, HSL conversion, channel math
//   tinct-harmony → harmony rules, palette derivation, label contrast
//
// One invocation produces one palette (or one per rule with --all):
//
//   args → base hex + rule → Palette::generate → swatch rows → stdout
//
// Rendering is direct ANSI: each swatch row paints a truecolor
// background block with the hex string on top in whichever of black or
// white reads better, followed by the HSL components in default
// colors. When stdout is not a terminal (or --plain is given) output
// degrades to bare hex lines, one per swatch, so palettes compose with
// shells and scripts:
//
//   tinct --random --plain | head -1      # one random hex color
//   tinct '#667eea' -r triadic --plain    # five lines, pipe anywhere

use std::env;
use std::io::{self, Write};
use std::process;

use tinct_harmony::contrast::label_for;
use tinct_harmony::rand::{Xorshift32, random_hex};
use tinct_harmony::{HarmonyKind, Palette, Swatch};

// ─── Command line ───────────────────────────────────────────────────────────

const USAGE: &str = "\
Usage: tinct [OPTIONS] [COLOR]

Derive a 5-color harmony palette from a base color.

Arguments:
  COLOR            base color as 6-digit hex, e.g. '#667eea'
                   (leading '#' optional)

Options:
  -r, --rule NAME  harmony rule: analogous (default), complementary,
                   triadic, tetradic, monochromatic
  -a, --all        render one palette per rule
      --random     use a random base color instead of COLOR
      --seed N     seed the random base (implies --random)
      --plain      bare hex lines, no ANSI colors
  -l, --list       list the rule names and exit
  -h, --help       show this help and exit";

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct Cli {
    base: Option<String>,
    rule: HarmonyKind,
    all: bool,
    random: bool,
    seed: Option<u32>,
    plain: bool,
    list: bool,
    help: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            base: None,
            rule: HarmonyKind::Analogous,
            all: false,
            random: false,
            seed: None,
            plain: false,
            list: false,
            help: false,
        }
    }
}

/// Walk the argument list. Flags may appear in any order around the
/// single positional color argument.
fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut cli = Cli::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-l" | "--list" => cli.list = true,
            "-a" | "--all" => cli.all = true,
            "--random" => cli.random = true,
            "--plain" => cli.plain = true,
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("missing value for --seed"))?;
                let seed = value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid seed '{value}'"))?;
                cli.seed = Some(seed);
                cli.random = true;
            }
            "-r" | "--rule" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("missing value for --rule"))?;
                cli.rule = HarmonyKind::from_name(value)
                    .ok_or_else(|| format!("unknown rule '{value}' (see --list)"))?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option '{arg}'"));
            }
            _ => {
                if cli.base.is_some() {
                    return Err(format!("unexpected argument '{arg}'"));
                }
                cli.base = Some(arg.clone());
            }
        }
    }

    Ok(cli)
}

/// Resolve the base color and derive the requested palettes.
fn palettes_for(cli: &Cli) -> Result<Vec<Palette>, String> {
    let base = if cli.random {
        let mut rng = cli
            .seed
            .map_or_else(Xorshift32::from_entropy, Xorshift32::new);
        random_hex(&mut rng)
    } else {
        cli.base
            .clone()
            .ok_or_else(|| String::from("missing base color (or pass --random)"))?
    };

    let kinds: Vec<HarmonyKind> = if cli.all {
        HarmonyKind::all().to_vec()
    } else {
        vec![cli.rule]
    };

    kinds
        .into_iter()
        .map(|kind| {
            Palette::generate(&base, kind).ok_or_else(|| format!("invalid color '{base}'"))
        })
        .collect()
}

// ─── Rendering ──────────────────────────────────────────────────────────────
//
// Pure functions writing to any `impl Write`, so tests can capture the
// exact bytes without a terminal.

/// Render one swatch row: a truecolor block carrying the hex label
/// (SGR 48;2 background, 38;2 foreground), reset, then the HSL
/// components in default colors.
fn render_swatch(w: &mut impl Write, swatch: &Swatch) -> io::Result<()> {
    let (r, g, b) = swatch.hsl.to_rgb8();
    let (lr, lg, lb) = label_for(swatch.hsl).rgb8();
    write!(
        w,
        "\x1b[48;2;{r};{g};{b}m\x1b[38;2;{lr};{lg};{lb}m  {:<9}\x1b[0m",
        swatch.hex
    )?;
    writeln!(
        w,
        "  hsl({:.1}, {:.1}%, {:.1}%)",
        swatch.hsl.h, swatch.hsl.s, swatch.hsl.l
    )
}

/// Render a full palette: rule name, then the five swatch rows.
fn render_palette(w: &mut impl Write, palette: &Palette) -> io::Result<()> {
    writeln!(w, "{}", palette.kind().name())?;
    for swatch in palette.swatches() {
        render_swatch(w, swatch)?;
    }
    Ok(())
}

/// Bare hex lines, one per swatch. The shell-composable form.
fn render_plain(w: &mut impl Write, palette: &Palette) -> io::Result<()> {
    for hex in palette.hex_strings() {
        writeln!(w, "{hex}")?;
    }
    Ok(())
}

/// Write all requested palettes in the chosen style.
fn write_output(w: &mut impl Write, palettes: &[Palette], colored: bool) -> io::Result<()> {
    for (i, palette) in palettes.iter().enumerate() {
        if colored {
            if i > 0 {
                writeln!(w)?;
            }
            render_palette(w, palette)?;
        } else {
            // With several palettes the name lines keep them apart;
            // a single plain palette stays bare for piping.
            if palettes.len() > 1 {
                writeln!(w, "{}", palette.kind().name())?;
            }
            render_plain(w, palette)?;
        }
    }
    Ok(())
}

// ─── Terminal probe ─────────────────────────────────────────────────────────

/// Whether stdout is a terminal (so ANSI output is appropriate).
#[cfg(unix)]
#[allow(unsafe_code)]
fn stdout_is_tty() -> bool {
    // SAFETY: isatty only inspects the file descriptor.
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
const fn stdout_is_tty() -> bool {
    false
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let cli = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("tinct: {e}");
        eprintln!("{USAGE}");
        process::exit(1);
    });

    if cli.help {
        println!("{USAGE}");
        return;
    }

    if cli.list {
        for kind in HarmonyKind::all() {
            println!("{}", kind.name());
        }
        return;
    }

    let palettes = palettes_for(&cli).unwrap_or_else(|e| {
        eprintln!("tinct: {e}");
        process::exit(1);
    });

    let colored = !cli.plain && stdout_is_tty();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_output(&mut out, &palettes, colored) {
        eprintln!("tinct: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn render_to_string(palettes: &[Palette], colored: bool) -> String {
        let mut buf = Vec::new();
        write_output(&mut buf, palettes, colored).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Argument parsing ──────────────────────────────────────────────────

    #[test]
    fn parse_defaults() {
        let cli = parse_args(&args(&["#667eea"])).unwrap();
        assert_eq!(cli.base.as_deref(), Some("#667eea"));
        assert_eq!(cli.rule, HarmonyKind::Analogous);
        assert!(!cli.all && !cli.random && !cli.plain);
    }

    #[test]
    fn parse_rule_long_and_short() {
        let cli = parse_args(&args(&["-r", "triadic", "#667eea"])).unwrap();
        assert_eq!(cli.rule, HarmonyKind::Triadic);

        let cli = parse_args(&args(&["#667eea", "--rule", "tetradic"])).unwrap();
        assert_eq!(cli.rule, HarmonyKind::Tetradic);
    }

    #[test]
    fn parse_unknown_rule_fails() {
        let err = parse_args(&args(&["--rule", "vaporwave"])).unwrap_err();
        assert!(err.contains("vaporwave"), "err: {err}");
    }

    #[test]
    fn parse_missing_rule_value_fails() {
        assert!(parse_args(&args(&["--rule"])).is_err());
    }

    #[test]
    fn parse_seed_implies_random() {
        let cli = parse_args(&args(&["--seed", "42"])).unwrap();
        assert!(cli.random);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn parse_bad_seed_fails() {
        assert!(parse_args(&args(&["--seed", "banana"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn parse_unknown_option_fails() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("--frobnicate"), "err: {err}");
    }

    #[test]
    fn parse_rejects_second_positional() {
        assert!(parse_args(&args(&["#667eea", "#ff0000"])).is_err());
    }

    #[test]
    fn parse_help_and_list_flags() {
        assert!(parse_args(&args(&["--help"])).unwrap().help);
        assert!(parse_args(&args(&["-l"])).unwrap().list);
    }

    // ── Palette resolution ────────────────────────────────────────────────

    #[test]
    fn single_rule_yields_one_palette() {
        let cli = parse_args(&args(&["#667eea"])).unwrap();
        let palettes = palettes_for(&cli).unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].swatches()[0].hex, "#667eea");
    }

    #[test]
    fn all_yields_one_palette_per_rule() {
        let cli = parse_args(&args(&["--all", "#667eea"])).unwrap();
        let palettes = palettes_for(&cli).unwrap();
        assert_eq!(palettes.len(), HarmonyKind::all().len());
    }

    #[test]
    fn invalid_base_is_an_error() {
        let cli = parse_args(&args(&["#12345"])).unwrap();
        let err = palettes_for(&cli).unwrap_err();
        assert!(err.contains("#12345"), "err: {err}");
    }

    #[test]
    fn missing_base_is_an_error() {
        let cli = parse_args(&args(&["-r", "triadic"])).unwrap();
        assert!(palettes_for(&cli).is_err());
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let cli = parse_args(&args(&["--seed", "42"])).unwrap();
        let a = palettes_for(&cli).unwrap();
        let b = palettes_for(&cli).unwrap();
        assert_eq!(a[0].swatches()[0].hex, b[0].swatches()[0].hex);
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    #[test]
    fn plain_output_is_bare_hex_lines() {
        let palette = Palette::generate("#ff0000", HarmonyKind::Complementary).unwrap();
        let out = render_to_string(&[palette], false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "#ff0000");
        assert_eq!(lines[1], "#00ffff");
        assert!(!out.contains('\x1b'), "plain output contains escapes");
    }

    #[test]
    fn plain_all_output_names_each_palette() {
        let palettes: Vec<Palette> = HarmonyKind::all()
            .iter()
            .map(|k| Palette::generate("#667eea", *k).unwrap())
            .collect();
        let out = render_to_string(&palettes, false);
        for kind in HarmonyKind::all() {
            assert!(out.contains(kind.name()), "missing {}", kind.name());
        }
    }

    #[test]
    fn colored_output_uses_truecolor_sgr() {
        let palette = Palette::generate("#ff0000", HarmonyKind::Triadic).unwrap();
        let out = render_to_string(&[palette], true);
        // Background block for the base swatch, reset after each row.
        assert!(out.contains("\x1b[48;2;255;0;0m"), "out: {out:?}");
        assert!(out.contains("\x1b[0m"));
        assert!(out.contains("hsl(0.0, 100.0%, 50.0%)"));
    }

    #[test]
    fn colored_output_picks_readable_labels() {
        // Dark navy swatch → white label; near-white swatch → black label.
        let navy = Palette::generate("#101040", HarmonyKind::Monochromatic).unwrap();
        let out = render_to_string(&[navy], true);
        assert!(out.contains("\x1b[38;2;255;255;255m"), "no white label: {out:?}");

        let pale = Palette::generate("#f0f0e0", HarmonyKind::Monochromatic).unwrap();
        let out = render_to_string(&[pale], true);
        assert!(out.contains("\x1b[38;2;0;0;0m"), "no black label: {out:?}");
    }
}
