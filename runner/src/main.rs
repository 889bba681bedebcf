use std::{env, fs, path::PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use platformer_core::input::{PAD_JUMP, PAD_LEFT, PAD_RESERVED_MASK, PAD_RIGHT};
use platformer_core::zone::zone_bounds;
use platformer_core::{replay_strict, replay_with_checkpoints, Checkpoint, Fix32, ZoneId};

#[derive(Debug)]
struct Cli {
    script_path: Option<PathBuf>,
    frames: u32,
    zone: ZoneId,
    checkpoint_every: u32,
    checkpoints_out: Option<PathBuf>,
    strict: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);

        let mut script_path: Option<PathBuf> = None;
        let mut frames = 600u32;
        let mut zone = ZoneId::Hub;
        let mut checkpoint_every = 60u32;
        let mut checkpoints_out: Option<PathBuf> = None;
        let mut strict = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--script" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--script requires a file path"))?;
                    script_path = Some(PathBuf::from(value));
                }
                "--frames" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--frames requires a number"))?;
                    frames = value
                        .parse::<u32>()
                        .with_context(|| format!("invalid --frames value: {value}"))?;
                }
                "--zone" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--zone requires a zone name"))?;
                    zone = ZoneId::parse(&value).ok_or_else(|| {
                        anyhow!("unknown zone: {value}. Expected cpu|gpu|ram|storage|hub|bios.")
                    })?;
                }
                "--checkpoint-every" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--checkpoint-every requires a number"))?;
                    checkpoint_every = value
                        .parse::<u32>()
                        .with_context(|| format!("invalid --checkpoint-every value: {value}"))?;
                }
                "--checkpoints-out" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--checkpoints-out requires a file path"))?;
                    checkpoints_out = Some(PathBuf::from(value));
                }
                "--strict" => {
                    strict = true;
                }
                "-h" | "--help" => {
                    println!(
                        "Usage: cargo run --release -- [--script <file.pad>] [--frames <n>] [--zone cpu|gpu|ram|storage|hub|bios] [--checkpoint-every <n>] [--checkpoints-out <file.json>] [--strict]\nWithout --script a built-in demo input tape is generated for --frames frames."
                    );
                    std::process::exit(0);
                }
                other => return Err(anyhow!("unknown argument: {other}. Use --help for usage.")),
            }
        }

        Ok(Self {
            script_path,
            frames,
            zone,
            checkpoint_every,
            checkpoints_out,
            strict,
        })
    }
}

/// Built-in tape: run right, hop, coast back to the left. Loops until the
/// requested frame count is filled.
fn demo_tape(frames: u32) -> Vec<u8> {
    let mut phrase = Vec::new();
    phrase.extend(std::iter::repeat(PAD_RIGHT).take(60));
    phrase.extend(std::iter::repeat(PAD_RIGHT | PAD_JUMP).take(10));
    phrase.extend(std::iter::repeat(PAD_RIGHT).take(40));
    phrase.extend(std::iter::repeat(0).take(20));
    phrase.extend(std::iter::repeat(PAD_LEFT).take(50));

    phrase
        .iter()
        .cycle()
        .take(frames as usize)
        .copied()
        .collect()
}

fn load_tape(cli: &Cli) -> Result<Vec<u8>> {
    let tape = match &cli.script_path {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("failed to read input script: {}", path.display()))?;
            if let Some(index) = bytes.iter().position(|byte| byte & PAD_RESERVED_MASK != 0) {
                bail!(
                    "input script {} has reserved pad bits set at frame {index}",
                    path.display()
                );
            }
            bytes
        }
        None => demo_tape(cli.frames),
    };
    Ok(tape)
}

fn print_report(final_checkpoint: &Checkpoint, zone: ZoneId) {
    println!("Replay finished.");
    println!("  Zone:     {}", zone.name());
    println!("  Frames:   {}", final_checkpoint.frame_count);
    println!("  State:    {:?}", final_checkpoint.state);
    println!(
        "  Position: ({}, {})",
        Fix32::from_raw(final_checkpoint.pos_x).to_int(),
        Fix32::from_raw(final_checkpoint.pos_y).to_int()
    );
    println!("  Health:   {}", final_checkpoint.health);
    println!("  Stamina:  {}", final_checkpoint.stamina);
    println!(
        "  Camera:   ({}, {})",
        final_checkpoint.camera_x, final_checkpoint.camera_y
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse()?;
    let tape = load_tape(&cli)?;
    let bounds = zone_bounds(cli.zone);
    tracing::info!(
        frames = tape.len(),
        zone = cli.zone.name(),
        strict = cli.strict,
        "starting replay"
    );

    if cli.strict {
        replay_strict(&tape, bounds)
            .map_err(|violation| anyhow!("strict replay failed: {violation}"))?;
    }

    let checkpoints = replay_with_checkpoints(&tape, bounds, cli.checkpoint_every);
    let final_checkpoint = checkpoints
        .last()
        .ok_or_else(|| anyhow!("replay produced no checkpoints"))?;
    print_report(final_checkpoint, cli.zone);

    if let Some(path) = cli.checkpoints_out {
        let json = serde_json::to_vec_pretty(&checkpoints)
            .context("failed to serialize checkpoints json")?;
        fs::write(&path, json)
            .with_context(|| format!("failed writing checkpoints output: {}", path.display()))?;
        println!("  Checkpoints JSON: {}", path.display());
    }

    Ok(())
}
