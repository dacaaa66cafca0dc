//! Anything that can make a sound opts in by implementing [`SoundMaker`].

use std::io::{self, Write};

pub trait SoundMaker {
    fn make_sound(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl SoundMaker for Dog {
    fn make_sound(&self) -> String {
        "Woof".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl SoundMaker for Cat {
    fn make_sound(&self) -> String {
        "Meow...".to_string()
    }
}

pub fn process_sound<W, S>(out: &mut W, maker: &S) -> io::Result<()>
where
    W: Write,
    S: SoundMaker + ?Sized,
{
    let sound = maker.make_sound();
    writeln!(out, "Processed sound: {sound}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processed(maker: &dyn SoundMaker) -> String {
        let mut out = Vec::new();
        process_sound(&mut out, maker).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dog_and_cat_sounds() {
        assert_eq!(Dog.make_sound(), "Woof");
        assert_eq!(Cat.make_sound(), "Meow...");
    }

    #[test]
    fn test_process_sound_prints_each_result() {
        assert_eq!(processed(&Dog), "Processed sound: Woof\n");
        assert_eq!(processed(&Cat), "Processed sound: Meow...\n");
    }

    #[test]
    fn test_any_implementor_is_accepted() {
        struct Robot;

        impl SoundMaker for Robot {
            fn make_sound(&self) -> String {
                "Beep".to_string()
            }
        }

        let makers: Vec<Box<dyn SoundMaker>> = vec![Box::new(Dog), Box::new(Cat), Box::new(Robot)];
        let mut out = Vec::new();
        for maker in &makers {
            process_sound(&mut out, maker.as_ref()).unwrap();
        }
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("Beep"));
    }
}
