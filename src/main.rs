// Copyright (c) 2024 Bastiaan Marinus van de Weerd

mod input;


macro_rules! days { ( $( $day:literal ),* ) => { paste::paste! {
	$( mod [<day $day>]; )*

	const DAYS: &[u8] = &[$( $day ),*];

	fn run(day: u8, input: &str) {
		match day {
			$( $day => {
				println!("Day {}, part 1: {}", day, [<day $day>]::part1(input));
				println!("Day {}, part 2: {}", day, [<day $day>]::part2(input));
			} )*
			_ => eprintln!("Day {day} is not solved (yet)"),
		}
	}
} } }

days!(09);


fn main() {
	let mut args = std::env::args().skip(1);
	let days = match args.next().map(|arg| arg.parse::<u8>()) {
		Some(Ok(day)) => vec![day],
		Some(Err(e)) => {
			eprintln!("Usage: advent24 [DAY] [INPUT_PATH] ({e})");
			std::process::exit(2)
		}
		None => DAYS.to_vec(),
	};
	let input_path = args.next().map(std::path::PathBuf::from);

	for day in days {
		let input = match &input_path {
			Some(path) => input::load_from(path),
			None => input::load(day),
		};
		let input = match input {
			Ok(input) => input,
			Err(e) => { eprintln!("Day {day}: {e:?}"); continue }
		};
		if day == 9 {
			if let Some(rendered) = day09::render(&input) { println!("{rendered}") }
		}
		run(day, &input);
	}
}
