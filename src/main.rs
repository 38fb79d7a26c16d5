#[macro_use] extern crate log;
extern crate simplelog;
extern crate quick_union;

use simplelog::*;
use std::io::{self, BufRead, BufReader, Write, stdin};
use std::fs::File;
use std::process;

use quick_union::{ClientConfig, ClientError, ClientRes};


fn main() {
	if let Err(e) = run() {
		error!("{}", e);
		eprintln!("quick_union: {}", e);
		process::exit(1);
	}
}

fn run() -> ClientRes {
	let stdin = stdin();
	let reader = BufReader::new(stdin);
	let mut lines_iter = reader.lines();

	let constants = match lines_iter.next() {
		Some(line) => line?,
		None => return Err(ClientError::Config("missing constants line".to_string())),
	};
	let config = ClientConfig::parse(&constants)?;

	if config.log_level != LevelFilter::Off {
		let logged = CombinedLogger::init(
			vec![
				WriteLogger::new(
					config.log_level,
					Config {time: None, level: None, target: None, location: None, time_format: None},
					File::create(&config.log_file)?)
			]
		);
		if let Err(e) = logged {
			eprintln!("quick_union: logging disabled: {}", e);
		}
	}
	info!("N: {}, mode: {:?}", config.n, config.mode);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	quick_union::run(&config, lines_iter, &mut out)?;
	out.flush()?;
	Ok(())
}
