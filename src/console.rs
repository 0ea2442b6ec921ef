use std::io::{self, BufRead, Write};

/// Accès ligne à ligne au terminal, injectable pour piloter la machine
/// à états sans TTY dans les tests.
pub trait Console {
    /// Lit une ligne, sans le retour chariot final. EOF = erreur d'E/S.
    fn read_line(&mut self) -> io::Result<String>;
    /// Écrit `text` suivi d'un saut de ligne.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
    /// Écrit `text` sans saut de ligne et vide le tampon (invite).
    fn write_prompt(&mut self, text: &str) -> io::Result<()>;
}

/// Console réelle sur un couple lecteur/écrivain (stdin/stdout verrouillés
/// en pratique : programme strictement séquentiel, un seul lecteur).
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Acquiert les deux flux au démarrage, relâchés à la sortie.
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout().lock(),
        }
    }
}

impl<R, W> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input stream",
            ));
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn write_prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }
}
