// Integration tests for the tape-language interpreter

use std::collections::VecDeque;

use braintty::interpreter::engine::{Config, Interpreter};
use braintty::interpreter::errors::RuntimeError;
use braintty::interpreter::io::{InputSource, OutputSink};

/// The classic greeting program; ends by emitting a newline.
const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.\
                           +++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

fn captured(config: Config) -> Interpreter {
    Interpreter::with_io(
        config,
        OutputSink::Captured(String::new()),
        InputSource::Queued(VecDeque::new()),
    )
}

fn file_config() -> Config {
    Config {
        from_file: true,
        ..Config::default()
    }
}

// === END-TO-END PROGRAMS ===

#[test]
fn test_hello_world() {
    let mut interpreter = captured(file_config());
    let steps = interpreter.evaluate(HELLO_WORLD).expect("evaluation failed");

    assert_eq!(interpreter.output().contents(), "Hello World!\n");
    assert!(steps > 0);
}

#[test]
fn test_step_count_matches_instructions_executed() {
    let mut interpreter = captured(file_config());
    let steps = interpreter.evaluate("+++").expect("evaluation failed");
    assert_eq!(steps, 3);
}

#[test]
fn test_comments_are_ignored() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });
    let steps = interpreter
        .evaluate("two plus one: ++ and + then print .")
        .expect("evaluation failed");

    assert_eq!(interpreter.output().contents(), "3");
    assert_eq!(steps, 4);
}

// === CELL ARITHMETIC ===

#[test]
fn test_increment_wraps_after_256_applications() {
    let mut interpreter = captured(file_config());
    interpreter
        .evaluate(&"+".repeat(256))
        .expect("evaluation failed");
    assert_eq!(interpreter.current_cell(), 0);
}

#[test]
fn test_decrement_wraps_zero_to_255() {
    let mut interpreter = captured(file_config());
    interpreter.evaluate("-").expect("evaluation failed");
    assert_eq!(interpreter.current_cell(), 255);
}

// === LOOPS ===

#[test]
fn test_empty_loop_on_zero_cell_is_skipped_once() {
    let mut interpreter = captured(file_config());
    // '[' jumps straight to ']' and the counter moves past it; one step total
    let steps = interpreter.evaluate("[]").expect("evaluation failed");
    assert_eq!(steps, 1);
}

#[test]
fn test_loop_drains_cell_to_zero() {
    let mut interpreter = captured(file_config());
    // + [ - ] executes: +, [, -, ] = 4 steps
    let steps = interpreter.evaluate("+[-]").expect("evaluation failed");
    assert_eq!(steps, 4);
    assert_eq!(interpreter.current_cell(), 0);
}

#[test]
fn test_loop_moves_value_between_cells() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });
    interpreter
        .evaluate("+++[>+<-]>.")
        .expect("evaluation failed");
    assert_eq!(interpreter.output().contents(), "3");
}

// === MALFORMED PROGRAMS ===

#[test]
fn test_unmatched_open_bracket_is_fatal() {
    let mut interpreter = captured(file_config());
    let err = interpreter.evaluate("+[").unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::MalformedProgram { position: 1, .. }
    ));
}

#[test]
fn test_unmatched_close_bracket_is_fatal() {
    let mut interpreter = captured(file_config());
    let err = interpreter.evaluate("]").unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::MalformedProgram { position: 0, .. }
    ));
}

#[test]
fn test_rejected_fragment_leaves_session_state_alone() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });
    interpreter.evaluate("++").expect("evaluation failed");

    // The malformed fragment must not run or disturb the tape
    assert!(interpreter.evaluate("+++]").is_err());

    interpreter.evaluate(".").expect("evaluation failed");
    assert_eq!(interpreter.output().contents(), "2");
}

// === SESSION BEHAVIOR ===

#[test]
fn test_tape_and_head_persist_across_fragments() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });

    let first = interpreter.evaluate("++").expect("evaluation failed");
    assert_eq!(first, 2);

    // The step counter resets per fragment; the cell value carries over
    let second = interpreter.evaluate(".").expect("evaluation failed");
    assert_eq!(second, 1);
    assert_eq!(interpreter.output().contents(), "2");
}

#[test]
fn test_head_position_persists_across_fragments() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });
    interpreter.evaluate(">>+++").expect("evaluation failed");
    interpreter.evaluate(".").expect("evaluation failed");

    assert_eq!(interpreter.pointer(), 2);
    assert_eq!(interpreter.output().contents(), "3");
}

// === INPUT ===

#[test]
fn test_read_stores_input_mod_256() {
    let mut interpreter = captured(file_config());
    interpreter.queue_input("300".to_string());
    interpreter.evaluate(",").expect("evaluation failed");
    assert_eq!(interpreter.current_cell(), 44);
}

#[test]
fn test_read_wraps_negative_input() {
    let mut interpreter = captured(file_config());
    interpreter.queue_input("-1".to_string());
    interpreter.evaluate(",").expect("evaluation failed");
    assert_eq!(interpreter.current_cell(), 255);
}

#[test]
fn test_read_then_write_round_trips_as_character() {
    let mut interpreter = captured(file_config());
    interpreter.queue_input("65".to_string());
    interpreter.evaluate(",.").expect("evaluation failed");
    assert_eq!(interpreter.output().contents(), "A");
}

#[test]
fn test_unparsable_input_is_a_typed_failure() {
    let mut interpreter = captured(file_config());
    interpreter.queue_input("abc".to_string());
    let err = interpreter.evaluate(",").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::InputFormat {
            line: "abc".to_string()
        }
    );
}

#[test]
fn test_read_without_queued_line_signals_pending_input() {
    let mut interpreter = captured(file_config());
    let err = interpreter.evaluate(",").unwrap_err();
    assert_eq!(err, RuntimeError::ReadPendingInput);

    // Queue a line and retry the same step without losing progress
    interpreter.queue_input("7".to_string());
    interpreter.step().expect("retried step failed");
    assert_eq!(interpreter.current_cell(), 7);
    assert_eq!(interpreter.steps(), 1);
}

// === OUTPUT MODES ===

#[test]
fn test_interactive_mode_terminates_each_write_with_newline() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..Config::default()
    });
    interpreter.evaluate("+.").expect("evaluation failed");
    assert_eq!(interpreter.output().contents(), "1\n");
}

#[test]
fn test_raw_output_prints_numeric_values() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });
    interpreter
        .evaluate(&format!("{}.", "+".repeat(200)))
        .expect("evaluation failed");
    assert_eq!(interpreter.output().contents(), "200");
}

// === TAPE GROWTH ===

#[test]
fn test_tape_grows_right_exactly_at_the_boundary() {
    let mut interpreter = captured(file_config());
    assert_eq!(interpreter.tape_len(), 32);

    interpreter.evaluate(&">".repeat(31)).expect("evaluation failed");
    assert_eq!(interpreter.tape_len(), 32);

    interpreter.evaluate(">").expect("evaluation failed");
    assert_eq!(interpreter.tape_len(), 64);
}

#[test]
fn test_tape_grows_left_once_per_chunk() {
    let mut interpreter = captured(file_config());

    interpreter.evaluate("<").expect("evaluation failed");
    assert_eq!(interpreter.tape_len(), 64);

    // Walking further left within the new chunk must not grow again
    interpreter.evaluate(&"<".repeat(31)).expect("evaluation failed");
    assert_eq!(interpreter.tape_len(), 64);
    assert_eq!(interpreter.pointer(), -32);

    interpreter.evaluate("<").expect("evaluation failed");
    assert_eq!(interpreter.tape_len(), 96);
}

#[test]
fn test_left_growth_preserves_written_cells() {
    let mut interpreter = captured(Config {
        raw_output: true,
        ..file_config()
    });
    interpreter
        .evaluate(&format!("+++++{}{}.", "<".repeat(40), ">".repeat(40)))
        .expect("evaluation failed");
    assert_eq!(interpreter.output().contents(), "5");
}

#[test]
fn test_backing_length_is_always_a_chunk_multiple() {
    let mut interpreter = captured(file_config());
    interpreter
        .evaluate(&format!("{}{}", "<".repeat(50), ">".repeat(120)))
        .expect("evaluation failed");
    assert_eq!(interpreter.tape_len() % 32, 0);
}

// === WINDOW ===

#[test]
fn test_window_trails_the_head_to_the_right() {
    let mut interpreter = captured(file_config());
    interpreter.evaluate(&">".repeat(8)).expect("evaluation failed");

    // With size 10 and margin 2 the window has slid to start at 1
    let view = interpreter.window_view();
    assert_eq!(view.cells[0].0, 1);
    assert_eq!(view.cells.len(), 10);
    assert_eq!(view.cursor, 7);
}

#[test]
fn test_show_memory_prints_a_frame_per_step() {
    let mut interpreter = captured(Config {
        show_memory: true,
        ..file_config()
    });
    interpreter.evaluate("+").expect("evaluation failed");

    let frame = interpreter.output().contents();
    assert!(frame.contains("+-----"));
    assert!(frame.contains('^'));
}

// === VERBOSE TRACE ===

#[test]
fn test_verbose_trace_describes_each_instruction() {
    let mut interpreter = captured(Config {
        verbose: true,
        ..file_config()
    });
    interpreter.evaluate("+><").expect("evaluation failed");

    let trace = interpreter.output().contents();
    assert!(trace.contains("Incrementing the current cell."));
    assert!(trace.contains("Moving the head right from cell 0 to 1."));
    assert!(trace.contains("Moving the head left from cell 1 to 0."));
}

#[test]
fn test_verbose_trace_reports_jump_targets() {
    let mut interpreter = captured(Config {
        verbose: true,
        ..file_config()
    });
    interpreter.evaluate("[]").expect("evaluation failed");

    let trace = interpreter.output().contents();
    assert!(trace.contains("Jumping to instruction 1."));
}
