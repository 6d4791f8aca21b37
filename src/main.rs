use clap::Parser;
use flame_gallery::{config, generate, logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flame-gallery")]
#[command(about = "Generate the fractal flame gallery website")]
#[command(long_about = "\
Generate the fractal flame gallery website

Scans the images directory for .png, .jpg and .gif renders, pairs each with
a same-named thumbnail, and writes index.html plus a.html … z.html into the
output directory. Each image links to its {name}.flame parameter file.

Layout (defaults, relative to the output directory):

  ../images/Fire.png     full-size render
  ../thumbs/Fire.png     thumbnail (optional, same filename)
  ../Fire.flame          parameter file (linked, never checked)

Site text, link roots and directories can be changed in gallery.toml inside
the output directory. Run 'flame-gallery --gen-config' for a documented copy.")]
#[command(version)]
struct Cli {
    /// Print each discovered image and debug logging
    #[arg(short = 'v')]
    verbose: bool,

    /// Link to local relative paths instead of the published site.
    /// Pages are still written; only the link root changes.
    #[arg(long = "sim")]
    sim: bool,

    /// Output directory for the generated pages
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Print a stock gallery.toml with all options documented
    #[arg(long)]
    gen_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    logging::init_logging(cli.verbose);

    let output_dir = std::path::absolute(&cli.output)?;
    let site_config = config::load_config(&output_dir)?;
    let options = config::Options::resolve(cli.verbose, cli.sim, &output_dir, &site_config);

    let records = generate::collect_records(&options)?;
    if options.verbose {
        output::print_scan_output(&records);
    }

    let summary = generate::write_site(&records, &options, &site_config)?;
    output::print_generate_output(&summary);

    Ok(())
}
