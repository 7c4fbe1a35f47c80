//! Session script steps.
//!
//! Each step is a single shell word: `next`, `prev`, `goto:<i>`, `dot:<i>`,
//! `resize:<viewport>:<container>`, `swipe:<x0>:<y0>:<x1>:<y1>` or
//! `drag:<x0>:<x1>`.

use std::str::FromStr;

use thiserror::Error;
use vitrine::{Carousel, CarouselEvent, Measurements, Point, RenderSink, Transition};

/// Why a script word could not be parsed.
#[derive(Debug, Error, PartialEq)]
pub enum StepParseError {
    #[error("unknown step `{0}`")]
    Unknown(String),
    #[error("step `{step}` expects {expected} values, got {got}")]
    Arity {
        step: String,
        expected: usize,
        got: usize,
    },
    #[error("step `{step}` has an invalid number `{value}`")]
    Number { step: String, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Next,
    Prev,
    GoTo(isize),
    Dot(usize),
    Resize(Measurements),
    Swipe { from: Point, to: Point },
    Drag { from: f32, to: f32 },
}

impl Step {
    /// Feeds the step into the carousel and reports the navigation it caused.
    pub fn run<S: RenderSink>(self, carousel: &mut Carousel<S>) -> Option<Transition> {
        match self {
            Self::Next => carousel.dispatch(CarouselEvent::NextClicked).transition,
            Self::Prev => carousel.dispatch(CarouselEvent::PrevClicked).transition,
            Self::GoTo(index) => Some(carousel.go_to(index)),
            Self::Dot(position) => {
                carousel
                    .dispatch(CarouselEvent::IndicatorClicked(position))
                    .transition
            }
            Self::Resize(measurements) => {
                carousel.dispatch(CarouselEvent::Resized(measurements));
                None
            }
            Self::Swipe { from, to } => {
                carousel.dispatch(CarouselEvent::TouchStart(from));
                carousel.dispatch(CarouselEvent::TouchMove(to));
                carousel.dispatch(CarouselEvent::TouchEnd(to)).transition
            }
            Self::Drag { from, to } => {
                carousel.dispatch(CarouselEvent::MouseDown(from));
                carousel.dispatch(CarouselEvent::MouseMove);
                carousel.dispatch(CarouselEvent::MouseUp(to)).transition
            }
        }
    }
}

fn numbers<T: FromStr>(
    step: &str,
    args: &[&str],
    expected: usize,
) -> Result<Vec<T>, StepParseError> {
    if args.len() != expected {
        return Err(StepParseError::Arity {
            step: step.to_string(),
            expected,
            got: args.len(),
        });
    }
    args.iter()
        .map(|value| {
            value.parse().map_err(|_| StepParseError::Number {
                step: step.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        let mut parts = word.split(':');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match name {
            "next" => numbers::<f32>(name, &args, 0).map(|_| Self::Next),
            "prev" => numbers::<f32>(name, &args, 0).map(|_| Self::Prev),
            "goto" => numbers::<isize>(name, &args, 1).map(|n| Self::GoTo(n[0])),
            "dot" => numbers::<usize>(name, &args, 1).map(|n| Self::Dot(n[0])),
            "resize" => numbers::<f32>(name, &args, 2)
                .map(|n| Self::Resize(Measurements::new(n[0], n[1]))),
            "swipe" => numbers::<f32>(name, &args, 4).map(|n| Self::Swipe {
                from: Point::new(n[0], n[1]),
                to: Point::new(n[2], n[3]),
            }),
            "drag" => numbers::<f32>(name, &args, 2).map(|n| Self::Drag {
                from: n[0],
                to: n[1],
            }),
            _ => Err(StepParseError::Unknown(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use vitrine::{CarouselConfig, RenderFrame};

    use super::*;

    #[test]
    fn parses_every_step_kind() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Next));
        assert_eq!("prev".parse::<Step>(), Ok(Step::Prev));
        assert_eq!("goto:-1".parse::<Step>(), Ok(Step::GoTo(-1)));
        assert_eq!("dot:3".parse::<Step>(), Ok(Step::Dot(3)));
        assert_eq!(
            "resize:375:343".parse::<Step>(),
            Ok(Step::Resize(Measurements::new(375.0, 343.0)))
        );
        assert_eq!(
            "swipe:300:100:230:105".parse::<Step>(),
            Ok(Step::Swipe {
                from: Point::new(300.0, 100.0),
                to: Point::new(230.0, 105.0),
            })
        );
        assert_eq!(
            "drag:600:480".parse::<Step>(),
            Ok(Step::Drag {
                from: 600.0,
                to: 480.0
            })
        );
    }

    #[test]
    fn rejects_malformed_words() {
        assert_eq!(
            "jump".parse::<Step>(),
            Err(StepParseError::Unknown("jump".to_string()))
        );
        assert!(matches!(
            "swipe:1:2".parse::<Step>(),
            Err(StepParseError::Arity {
                expected: 4,
                got: 2,
                ..
            })
        ));
        assert!(matches!(
            "dot:-2".parse::<Step>(),
            Err(StepParseError::Number { .. })
        ));
        assert!(matches!(
            "next:1".parse::<Step>(),
            Err(StepParseError::Arity { .. })
        ));
    }

    #[test]
    fn steps_drive_the_carousel() {
        let mut carousel = Carousel::new(
            CarouselConfig::default(),
            7,
            Measurements::new(1280.0, 1248.0),
            Vec::<RenderFrame>::new(),
        )
        .unwrap();

        let script = ["next", "swipe:300:100:230:105", "drag:600:480", "goto:9", "prev"];
        let outcomes: Vec<Option<Transition>> = script
            .iter()
            .map(|word| word.parse::<Step>().unwrap().run(&mut carousel))
            .collect();

        assert_eq!(outcomes[0], Some(Transition::Moved { from: 0, to: 1 }));
        assert_eq!(outcomes[1], Some(Transition::Moved { from: 1, to: 2 }));
        assert_eq!(outcomes[2], Some(Transition::Moved { from: 2, to: 3 }));
        assert_eq!(outcomes[3], Some(Transition::Rejected));
        assert_eq!(outcomes[4], Some(Transition::Moved { from: 3, to: 2 }));
    }
}
