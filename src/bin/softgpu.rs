use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "softgpu", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a scene and write the framebuffer as a PNG.
    Render(RenderArgs),
    /// Print the commands of a scene without executing them.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the scene's framebuffer width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene's framebuffer height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<softgpu::SceneDesc> {
    softgpu::SceneDesc::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut scene = read_scene(&args.in_path)?;
    if let Some(width) = args.width {
        scene.canvas.width = width;
    }
    if let Some(height) = args.height {
        scene.canvas.height = height;
    }

    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let (mut mem, commands) = scene
        .build_with_root(assets_root)
        .with_context(|| "build scene")?;

    let stats = softgpu::gpu_execute(&mut mem, &commands);

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    mem.framebuffer()
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} draws, {} fragments written)",
        args.out.display(),
        stats.draws,
        stats.fragments_written
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    scene.validate().with_context(|| "validate scene")?;

    println!(
        "canvas {}x{}, {} buffers, {} textures, {} uniforms, {} programs",
        scene.canvas.width,
        scene.canvas.height,
        scene.buffers.len(),
        scene.textures.len(),
        scene.uniforms.len(),
        scene.programs.len()
    );
    let mut draw_id = 0u32;
    for (i, command) in scene.commands.iter().enumerate() {
        match command {
            softgpu::Command::Draw(_) => {
                println!("{i:>4}: [draw_id {draw_id}] {}", command.summary());
                draw_id += 1;
            }
            softgpu::Command::Clear(_) => println!("{i:>4}: {}", command.summary()),
        }
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&scene.commands).with_context(|| "encode commands")?
    );
    Ok(())
}
