use crate::data::{Program, HEIGHT, WIDTH};
use crate::scene::Scene;

macro_rules! eprintln_red {
    () => {
        eprintln!();
    };
    ($arg:tt) => {
        eprintln!("\x1B[31;1m{}\x1B[0m", $arg);
    };
}

const RESO_WARNING: &str = "\
	Raincity renders on the CPU, large scales \
	will make it work for its money.\
	";

impl Program {
    pub fn eval_args(mut self, args: &mut dyn Iterator<Item = &String>) -> Self {
        args.next();

        loop {
            let arg = match args.next() {
                Some(st) => st.as_str(),
                None => break,
            };

            match arg {
                "--seed" => {
                    let seed = args
                        .next()
                        .expect("Argument error: Expected u64 value for seed")
                        .parse::<u64>()
                        .expect("Argument error: Invalid value");

                    self.seed = Some(seed);
                }

                "--scale" => {
                    self.scale = args
                        .next()
                        .expect("Argument error: Expected u8 value for scale")
                        .parse::<u8>()
                        .expect("Argument error: Invalid value");

                    if self.scale == 0 {
                        panic!("Argument error: scale is 0");
                    }
                }

                "--fps" => {
                    let rate = args
                        .next()
                        .expect("Argument error: Expected value for refresh rate")
                        .parse::<f64>()
                        .expect("Argument error: Invalid value");

                    if rate <= 0.0 {
                        panic!("Argument error: refresh rate must be positive");
                    }

                    self.change_fps_frac((rate * 1000.0) as u32);
                }

                &_ => eprintln!("Argument error: Unknown option {}", arg),
            }
        }

        // Rebuild the scene so --seed takes effect on the skyline.
        self.scene = Scene::new(self.seed);

        self
    }

    pub fn print_startup_info(&self) {
        println!("\nWelcome to Raincity!\nA night skyline under a steady drizzle.");

        eprintln!("Startup configuration: ");

        println!("Refresh rate: {}hz", self.milli_hz as f64 / 1000.0);
        println!("Canvas: {}x{} at scale {}", WIDTH, HEIGHT, self.scale);

        match self.seed {
            Some(seed) => println!("Seed: {} (skyline is reproducible)", seed),
            None => println!("Seed: taken from the OS"),
        }

        let tallest = self
            .scene
            .buildings()
            .iter()
            .map(|b| b.h)
            .max()
            .unwrap_or(0);

        println!("Tallest building tonight: {} px", tallest);

        if self.scale >= 3 {
            eprintln_red!(RESO_WARNING);
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        std::iter::once("raincity")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn seed_flag_pins_the_skyline() {
        let args = strings(&["--seed", "77"]);

        let a = Program::new().eval_args(&mut args.iter());
        let b = Program::new().eval_args(&mut args.iter());

        assert_eq!(a.seed, Some(77));
        assert_eq!(a.scene.buildings(), b.scene.buildings());
    }

    #[test]
    fn scale_and_fps_flags_apply() {
        let args = strings(&["--scale", "2", "--fps", "30"]);
        let prog = Program::new().eval_args(&mut args.iter());

        assert_eq!(prog.scale(), 2);
        assert_eq!(prog.milli_hz, 30 * 1000);
    }

    #[test]
    #[should_panic]
    fn zero_scale_is_rejected() {
        let args = strings(&["--scale", "0"]);
        let _ = Program::new().eval_args(&mut args.iter());
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let args = strings(&["--frobnicate"]);
        let prog = Program::new().eval_args(&mut args.iter());

        assert_eq!(prog.scale(), crate::data::DEFAULT_SCALE);
    }
}
