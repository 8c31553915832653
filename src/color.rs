extern crate termcolor;

use termcolor::{Color, ColorSpec, WriteColor};

pub fn set_fg<W: WriteColor + ?Sized>(dest: &mut W, color: Color) {
    let _ = dest.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true));
}
pub fn reset_fg<W: WriteColor + ?Sized>(dest: &mut W) {
    let _ = dest.set_color(ColorSpec::new().set_fg(None).set_intense(true));
}

macro_rules! write_color {
    ($dest:expr, $color:expr,$typ:expr,  $($arg:tt)*) => { {
        $crate::color::set_fg($dest, $color);
        let _ = write!($dest,"{:>9}: ", $typ);
        $crate::color::reset_fg($dest);
        let _ = writeln!($dest, $($arg)*);
    }
    };
}

macro_rules! write_error {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Red, $typ, $($arg)*);
    };
}

macro_rules! write_warn {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Yellow, $typ, $($arg)*);
    };
}

macro_rules! write_info {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Blue, $typ, $($arg)*);
    };
}

macro_rules! write_ok {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Green, $typ, $($arg)*);
    };
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use termcolor::{Buffer, Color};

    #[test]
    fn status_lines_are_right_aligned() {
        let mut buf = Buffer::no_color();
        write_warn!(&mut buf, "Warning", "score {}", 0);
        write_ok!(&mut buf, "Submitted", "#{}", 901);
        assert_eq!(
            String::from_utf8_lossy(buf.as_slice()),
            "  Warning: score 0\nSubmitted: #901\n"
        );
    }

    #[test]
    fn warn_is_yellow() {
        let mut buf = Buffer::ansi();
        write_warn!(&mut buf, "Warning", "empty");
        let text = String::from_utf8_lossy(buf.as_slice()).into_owned();
        assert!(text.contains("\x1b[38;5;11m"));
        assert!(text.ends_with("empty\n"));
    }
}
