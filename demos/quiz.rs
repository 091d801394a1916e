// ============================================================================
// Addition Quiz Example
// ============================================================================

use quiz_kit::prelude::*;

const QUESTIONS: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    quiz_kit::logging::init_logging("debug");

    let mut reader = PromptedReader::stdio();

    println!("=== Addition Quiz ===\n");

    let mut correct = 0;
    for i in 1..=QUESTIONS {
        let a = rand_int(1, 20)?;
        let b = rand_int(1, 20)?;

        match reader.get_int(&format!("Q{i}: {a} + {b} = ")) {
            Ok(guess) if guess == a + b => {
                println!("  correct");
                correct += 1;
            },
            Ok(_) => println!("  wrong, it was {}", a + b),
            Err(InputError::FormatMismatch { token, .. }) => {
                println!("  {token:?} is not a number, it was {}", a + b);
                // After the last question, get_string's own discard clears the line.
                if i < QUESTIONS {
                    reader.discard_line()?;
                }
            },
            Err(e) => return Err(e.into()),
        }
    }

    let name = reader.get_string("\nYour name: ")?;
    let score = round_double(1, correct as f64 / QUESTIONS as f64 * 100.0);
    println!("{name}: {correct}/{QUESTIONS} ({score}%)");

    Ok(())
}
