mod config;
mod report;

use clap::Parser as _;
use color_eyre::eyre::WrapErr as _;

pub type Result<T> = color_eyre::Result<T>;

#[derive(clap::Parser)]
struct Args {
	/// Print handles in hexadecimal.
	#[arg(long)]
	hex: bool,

	/// Report equal handles once per occurrence.
	#[arg(long)]
	keep_duplicates: bool,

	/// Raw context values, decimal or 0x-prefixed hexadecimal.
	values: Vec<String>,
}

fn main() -> Result<()> {
	color_eyre::install()?;
	env_logger::init();

	let args = Args::parse();

	let mut config = config::Config::read_from_config_file()?;

	config.apply_args(args.hex, args.keep_duplicates);

	log::debug!("{config:?}");

	let handles = args
		.values
		.iter()
		.map(|x| -> Result<ctxh::ContextHandle> {
			let handle = x
				.parse::<ctxh::ContextHandle>()
				.wrap_err_with(|| format!("failed to read '{x}'"))?;

			log::debug!("'{x}' -> {handle} ({handle:#x})");
			Ok(handle)
		})
		.collect::<Result<Vec<_>>>()?;

	print!("{}", report::build(handles, &config));

	Ok(())
}
