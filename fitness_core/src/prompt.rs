//! Console prompts.
//!
//! Text answers are whole lines; numeric answers are whitespace-separated
//! tokens. A token that does not parse is returned as
//! [`Error::InvalidNumber`] rather than retried.

use crate::{Error, Result};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// A single typed input request, in the order the journal asks for them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Weight,
    Height,
    GoalType,
    TargetValue,
    CurrentValue,
    WorkoutKind,
    WorkoutName,
    Duration,
    Intensity,
    Distance,
    Sets,
    Reps,
    MealType,
    Calories,
    NutrientCount,
    NutrientName(u32),
    NutrientAmount(u32),
}

impl Field {
    /// Prompt text shown before reading the answer
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Name => "Enter your name: ",
            Field::Age => "Enter your age: ",
            Field::Weight => "Enter your weight (kg): ",
            Field::Height => "Enter your height (cm): ",
            Field::GoalType => "Enter your goal type (e.g., Weight Loss): ",
            Field::TargetValue => "Enter your target value: ",
            Field::CurrentValue => "Enter your current value: ",
            Field::WorkoutKind => "Enter workout type (Cardio/Strength): ",
            Field::WorkoutName => "Enter workout name: ",
            Field::Duration => "Enter duration (minutes): ",
            Field::Intensity => "Enter intensity (1-10): ",
            Field::Distance => "Enter distance (km): ",
            Field::Sets => "Enter sets: ",
            Field::Reps => "Enter reps: ",
            Field::MealType => "Enter meal type: ",
            Field::Calories => "Enter calories: ",
            Field::NutrientCount => "Enter number of nutrients: ",
            Field::NutrientName(_) => "Enter nutrient name: ",
            Field::NutrientAmount(_) => "Enter nutrient amount: ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Age => write!(f, "age"),
            Field::Weight => write!(f, "weight"),
            Field::Height => write!(f, "height"),
            Field::GoalType => write!(f, "goal type"),
            Field::TargetValue => write!(f, "target value"),
            Field::CurrentValue => write!(f, "current value"),
            Field::WorkoutKind => write!(f, "workout type"),
            Field::WorkoutName => write!(f, "workout name"),
            Field::Duration => write!(f, "duration"),
            Field::Intensity => write!(f, "intensity"),
            Field::Distance => write!(f, "distance"),
            Field::Sets => write!(f, "sets"),
            Field::Reps => write!(f, "reps"),
            Field::MealType => write!(f, "meal type"),
            Field::Calories => write!(f, "calories"),
            Field::NutrientCount => write!(f, "number of nutrients"),
            Field::NutrientName(i) => write!(f, "nutrient #{} name", i + 1),
            Field::NutrientAmount(i) => write!(f, "nutrient #{} amount", i + 1),
        }
    }
}

/// Asks questions on `output` and reads answers from `input`
///
/// Numbers are read as whitespace-separated tokens, so several can share a
/// line (`25 80 180`). After a number, the rest of its line stays pending
/// until [`Prompter::finish_line`] drops it or [`Prompter::text`] returns it.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Unread remainder of the current line, if a number was taken from it
    pending: Option<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: None,
        }
    }

    /// Read a free-text answer
    ///
    /// Returns the rest of the pending line if there is one, otherwise the
    /// next full line (line ending removed, otherwise as typed).
    pub fn text(&mut self, field: Field) -> Result<String> {
        self.show(&field)?;
        match self.pending.take() {
            Some(rest) => Ok(rest),
            None => self.read_line(&field),
        }
    }

    /// Read a whole number
    pub fn integer(&mut self, field: Field) -> Result<i32> {
        self.number(field)
    }

    /// Read a real number
    pub fn real(&mut self, field: Field) -> Result<f64> {
        self.number(field)
    }

    /// Read a non-negative count
    pub fn count(&mut self, field: Field) -> Result<u32> {
        self.number(field)
    }

    /// Drop whatever is left of the line the last number came from
    pub fn finish_line(&mut self) {
        if let Some(rest) = self.pending.take() {
            if !rest.trim().is_empty() {
                tracing::debug!("Ignoring trailing input {:?}", rest.trim());
            }
        }
    }

    fn number<T: FromStr>(&mut self, field: Field) -> Result<T> {
        self.show(&field)?;
        let token = self.next_token(&field)?;
        token.parse::<T>().map_err(|_| {
            tracing::debug!("Rejected {:?} for {}", token, field);
            Error::InvalidNumber {
                field: field.to_string(),
                input: token,
            }
        })
    }

    /// Next whitespace-separated token, reading lines until one turns up
    fn next_token(&mut self, field: &Field) -> Result<String> {
        loop {
            if let Some(rest) = self.pending.as_deref() {
                let rest = rest.trim_start();
                if !rest.is_empty() {
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    let token = rest[..end].to_string();
                    self.pending = Some(rest[end..].to_string());
                    return Ok(token);
                }
            }
            let line = self.read_line(field)?;
            self.pending = Some(line);
        }
    }

    fn show(&mut self, field: &Field) -> Result<()> {
        write!(self.output, "{}", field.prompt())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self, field: &Field) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof {
                field: field.to_string(),
            });
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Give back the output stream (used by tests to inspect prompts)
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_text_keeps_inner_whitespace() {
        let mut p = prompter("Mary Jane  \r\n");
        assert_eq!(p.text(Field::Name).unwrap(), "Mary Jane  ");
    }

    #[test]
    fn test_numbers_are_trimmed() {
        let mut p = prompter(" 42 \n72.5\n3\n");
        assert_eq!(p.integer(Field::Age).unwrap(), 42);
        assert_eq!(p.real(Field::Weight).unwrap(), 72.5);
        assert_eq!(p.count(Field::NutrientCount).unwrap(), 3);
    }

    #[test]
    fn test_prompt_written_before_read() {
        let mut p = prompter("30\n");
        p.integer(Field::Age).unwrap();
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "Enter your age: ");
    }

    #[test]
    fn test_malformed_number_reports_field_and_input() {
        let mut p = prompter("thirty\n");
        match p.integer(Field::Age) {
            Err(Error::InvalidNumber { field, input }) => {
                assert_eq!(field, "age");
                assert_eq!(input, "thirty");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut p = prompter("-1\n");
        assert!(matches!(
            p.count(Field::NutrientCount),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_fractional_integer_rejected() {
        let mut p = prompter("7.5\n");
        assert!(p.integer(Field::Intensity).is_err());
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        match p.text(Field::MealType) {
            Err(Error::UnexpectedEof { field }) => assert_eq!(field, "meal type"),
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_line_is_valid_text() {
        let mut p = prompter("\n");
        assert_eq!(p.text(Field::GoalType).unwrap(), "");
    }

    #[test]
    fn test_several_numbers_on_one_line() {
        let mut p = prompter("25 80 180\n");
        assert_eq!(p.integer(Field::Age).unwrap(), 25);
        assert_eq!(p.real(Field::Weight).unwrap(), 80.0);
        assert_eq!(p.real(Field::Height).unwrap(), 180.0);

        // Every prompt is still shown
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            output,
            "Enter your age: Enter your weight (kg): Enter your height (cm): "
        );
    }

    #[test]
    fn test_blank_lines_skipped_before_number() {
        let mut p = prompter("\n   \n7\n");
        assert_eq!(p.integer(Field::Intensity).unwrap(), 7);
    }

    #[test]
    fn test_text_after_number_takes_rest_of_line() {
        let mut p = prompter("45 Heavy day\n");
        assert_eq!(p.integer(Field::Duration).unwrap(), 45);
        assert_eq!(p.text(Field::MealType).unwrap(), " Heavy day");
    }

    #[test]
    fn test_finish_line_drops_rest_of_line() {
        let mut p = prompter("400 kcal\nBreakfast\n");
        assert_eq!(p.integer(Field::Calories).unwrap(), 400);
        p.finish_line();
        assert_eq!(p.text(Field::MealType).unwrap(), "Breakfast");
    }

    #[test]
    fn test_bad_token_reported_alone() {
        let mut p = prompter("25 eighty 180\n");
        assert_eq!(p.integer(Field::Age).unwrap(), 25);
        match p.real(Field::Weight) {
            Err(Error::InvalidNumber { field, input }) => {
                assert_eq!(field, "weight");
                assert_eq!(input, "eighty");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_nutrient_field_names() {
        assert_eq!(Field::NutrientName(0).to_string(), "nutrient #1 name");
        assert_eq!(Field::NutrientAmount(2).to_string(), "nutrient #3 amount");
    }
}
