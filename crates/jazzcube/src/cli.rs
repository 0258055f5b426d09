use eyre::{Context, Result};
use jazzcube_core::{Cube, Dimensions, ScrambleParams, SolveStep, notation};

use crate::render;

/// Jazzcube command-line interface
///
/// Turns the slices of an X×Y×Z cube and prints the result as text.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Size of the cube, either `N` or `XxYxZ`. Invalid sizes fall back to
    /// 3x3x3.
    #[arg(short, long, default_value = "3")]
    pub size: String,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the solved cube.
    Show,
    /// Apply moves such as `R U' 2F` and print the result.
    Apply {
        /// Moves to apply, in order.
        moves: Vec<String>,
    },
    /// Scramble the cube one move at a time and print the result.
    Scramble {
        /// Number of scramble moves. Defaults to ten times the largest side.
        #[arg(short = 'n', long)]
        length: Option<u32>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<String>,
        /// Undo the scramble step by step afterwards.
        #[arg(long)]
        solve: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let dims = args.size.parse::<Dimensions>().unwrap_or_else(|e| {
        log::warn!("{e}; using {}", Dimensions::default());
        Dimensions::default()
    });
    let mut cube = Cube::new(dims);

    match args.subcommand {
        Subcommand::Show => {
            print!("{}", render::render_cube(&cube));
            Ok(())
        }

        Subcommand::Apply { moves } => {
            let moves = notation::parse_moves(&moves.join(" ")).wrap_err("error parsing moves")?;
            for (mv, e) in cube.apply_all(moves) {
                println!("skipped {mv}: {e}");
            }
            print!("{}", render::render_cube(&cube));
            println!("solved: {}", cube.is_solved());
            Ok(())
        }

        Subcommand::Scramble {
            length,
            seed,
            solve,
        } => {
            let length = length.unwrap_or_else(|| dims.default_scramble_length());
            let params = match seed {
                Some(seed) => ScrambleParams::with_seed(length, seed),
                None => ScrambleParams::new(length),
            };
            println!("scrambling {dims} with seed {:?}", params.seed);
            cube.scramble_with(&params);

            while cube.scramble_remaining() > 0 {
                let applied = cube.history().len();
                let remaining = cube.exec_next_scramble_move()?;
                if cube.history().len() > applied
                    && let Some(mv) = cube.history().last()
                {
                    println!("{:>5}  ({remaining} left)", mv.to_string());
                }
            }
            println!(
                "scramble: {}",
                notation::format_moves(cube.history().iter()),
            );
            print!("{}", render::render_cube(&cube));

            if solve {
                while let SolveStep::Undone { mv, remaining } = cube.solve_step()? {
                    println!("undo {:>5}  ({remaining} left)", mv.to_string());
                }
                print!("{}", render::render_cube(&cube));
                println!("solved: {}", cube.is_solved());
            }
            Ok(())
        }
    }
}
