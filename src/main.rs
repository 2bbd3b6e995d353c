mod data;
mod graphics;
mod scene;
mod window;

use data::Program;

fn main() {
    let args = std::env::args().collect::<Vec<_>>();

    let prog = Program::new().eval_args(&mut args.iter());

    window::winit_main(prog);
}
