/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

mod shell_test {
    use std::io::Cursor;

    use setkit::shell::Shell;

    fn run_script(lines: &[&str]) -> String {
        let script = lines.join("\n") + "\n";
        let mut output = Vec::new();
        Shell::new(Cursor::new(script), &mut output)
            .run()
            .expect("shell run failed");
        String::from_utf8(output).expect("shell output is utf-8")
    }

    #[test]
    fn test_full_session() {
        let output = run_script(&[
            "1", // accept both sets
            "4", "1", "2", "3", "4", // set A
            "4", "3", "4", "5", "6", // set B
            "2",  // display
            "6",  // intersection
            "7",  // union
            "8",  // difference
            "9",  // subset
            "10", // exit
        ]);

        assert!(output.contains("Sets accepted."));
        assert!(output.contains("Set A: {1, 2, 3, 4}"));
        assert!(output.contains("Set B: {3, 4, 5, 6}"));
        assert!(output.contains("Intersection: {3, 4}"));
        assert!(output.contains("Union: {1, 2, 3, 4, 5, 6}"));
        assert!(output.contains("Difference: {1, 2}"));
        assert!(output.contains("Set A is not a subset of set B"));
        assert!(output.contains("End of session."));
    }

    #[test]
    fn test_invalid_choice_recovers() {
        let output = run_script(&["42", "10"]);
        assert!(output.contains("error: invalid choice \"42\""));
        assert!(output.contains("End of session."));
    }

    #[test]
    fn test_invalid_set_id_aborts_iteration() {
        let output = run_script(&[
            "1", "1", "x", // set A = {x}
            "0", // set B empty
            "3", "C", // bad set id; element prompt never happens
            "4",  // sizes are untouched
            "10",
        ]);
        assert!(output.contains("error: unknown set \"C\""));
        assert!(output.contains("Set A has 1 element(s)"));
        assert!(output.contains("Set B has 0 element(s)"));
    }

    #[test]
    fn test_delete_absent_is_silent() {
        let output = run_script(&[
            "1", "3", "p", "q", "r", // set A
            "0",  // set B empty
            "3", "A", "z", // absent element
            "3", "A", "q", // present element
            "4", "10",
        ]);
        assert!(!output.contains("Deleted z"));
        assert!(output.contains("Deleted q from set A"));
        assert!(output.contains("Set A has 2 element(s)"));
    }

    #[test]
    fn test_accept_deduplicates() {
        let output = run_script(&[
            "1", "3", "2", "2", "7", // set A with a duplicate
            "0", "4", "10",
        ]);
        assert!(output.contains("Set A has 2 element(s)"));
    }

    #[test]
    fn test_invalid_count_recovers() {
        let output = run_script(&["1", "many", "10"]);
        assert!(output.contains("error: invalid element count \"many\""));
        assert!(output.contains("End of session."));
    }

    #[test]
    fn test_contains_check() {
        let output = run_script(&[
            "1", "2", "red", "blue", // set A
            "1", "green", // set B
            "5", "red", "A", // present
            "5", "red", "B", // absent
            "10",
        ]);
        assert!(output.contains("red is present in set A"));
        assert!(output.contains("red is not present in set B"));
    }

    #[test]
    fn test_subset_of_empty_self() {
        let output = run_script(&[
            "1", "0", // set A empty
            "2", "u", "v", // set B
            "9", "10",
        ]);
        assert!(output.contains("Set A is a subset of set B"));
    }

    #[test]
    fn test_empty_display_and_results() {
        let output = run_script(&["2", "6", "10"]);
        assert!(output.contains("Set A is empty"));
        assert!(output.contains("Set B is empty"));
        assert!(output.contains("Intersection: (empty)"));
    }

    #[test]
    fn test_end_of_input_ends_loop() {
        // No exit command; the loop ends cleanly at end of input.
        let output = run_script(&["2"]);
        assert!(output.contains("Set A is empty"));
        assert!(!output.contains("End of session."));
    }
}
