use super::{evaluate, Address, Labels, NextFrame, Stack, UntilFrame, Var};
use crate::error;
use crate::lang::{token::*, Error, ErrorCode, Lexer};

type Result<T> = std::result::Result<T, Error>;

/// ## Events returned from `Runtime::execute`

#[derive(Debug)]
pub enum Event {
    /// The program reached `END` or ran off the end of the source.
    Stopped,
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// All output of one `PRINT` statement.
    Print(String),
    /// Waiting on `enter` or `end_of_input`.
    Input(String),
    /// Non-fatal; the run continues.
    Warning(String),
    /// Fatal; the run is over.
    Error(Error),
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Start,
    Running,
    Input(String, usize),
    Stopped,
}

/// ## Statement interpreter
///
/// Owns everything one run of one program needs. Independent programs
/// use independent runtimes.

#[derive(Debug)]
pub struct Runtime {
    lex: Lexer,
    state: State,
    labels: Labels,
    var: Var,
    next_stack: Stack<NextFrame>,
    until_stack: Stack<UntilFrame>,
    return_stack: Stack<Address>,
    pending: Option<Event>,
    statement: Address,
}

impl Runtime {
    pub fn new(source: &str) -> Runtime {
        Runtime {
            lex: Lexer::new(source),
            state: State::Start,
            labels: Labels::default(),
            var: Var::new(),
            next_stack: Stack::new("TOO MANY FOR LOOPS", ErrorCode::NextWithoutFor),
            until_stack: Stack::new("TOO MANY REPEAT LOOPS", ErrorCode::NextWithoutFor),
            return_stack: Stack::new("TOO MANY GOSUBS", ErrorCode::ReturnWithoutGosub),
            pending: None,
            statement: 0,
        }
    }

    /// Arranges for the next `execute` to start the program over.
    pub fn run(&mut self) {
        self.state = State::Start;
        self.pending = None;
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn var(&self, var_name: &str) -> Result<f64> {
        Ok(self.var.fetch(Var::index(var_name)?))
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped && self.pending.is_none()
    }

    /// Answers a pending `INPUT`.
    pub fn enter(&mut self, line: &str) {
        if let State::Input(_, var) = self.state {
            self.state = State::Running;
            match line.trim().parse::<f64>() {
                Ok(val) => self.var.store(var, val),
                Err(_) => {
                    tracing::warn!(input = line, "invalid input");
                    self.pending = Some(Event::Warning("INVALID INPUT".to_string()));
                }
            }
        }
    }

    /// Fails a pending `INPUT` because no line could be read.
    pub fn end_of_input(&mut self) {
        if let State::Input(..) = self.state {
            let event = self.fail(error!(InputReadError));
            self.pending = Some(event);
        }
    }

    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            tracing::debug!(pc = self.lex.pc(), "interrupted");
            self.state = State::Stopped;
            self.pending = None;
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.pending.take() {
            return event;
        }
        if let State::Input(prompt, _) = &self.state {
            return Event::Input(prompt.clone());
        }
        if self.state == State::Stopped {
            return Event::Stopped;
        }
        if self.state == State::Start {
            if let Err(error) = self.start() {
                return self.fail(error);
            }
        }
        for _ in 0..cycles {
            match self.statement() {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => return self.fail(error),
            }
        }
        Event::Running
    }

    fn start(&mut self) -> Result<()> {
        self.var.clear();
        self.next_stack.clear();
        self.until_stack.clear();
        self.return_stack.clear();
        self.statement = 0;
        self.labels = Labels::build(&mut self.lex)?;
        tracing::debug!(labels = self.labels.len(), "label table built");
        self.state = State::Running;
        Ok(())
    }

    fn stop(&mut self) -> Event {
        tracing::debug!(pc = self.lex.pc(), "program stopped");
        self.state = State::Stopped;
        Event::Stopped
    }

    fn fail(&mut self, error: Error) -> Event {
        let error = match error.line() {
            Some(_) => error,
            None => error.in_line(self.lex.line_of(self.statement)),
        };
        tracing::debug!(%error, "program failed");
        self.state = State::Stopped;
        Event::Error(error)
    }

    fn statement(&mut self) -> Result<Option<Event>> {
        self.statement = self.lex.pc();
        let token = self.lex.next_token()?;
        self.statement = self.lex.token_start();
        match token {
            Token::Variable(_) => {
                self.lex.push_back();
                self.exec_let()?;
            }
            Token::Keyword(keyword) => return self.keyword(keyword),
            Token::EndOfProgram => return Ok(Some(self.stop())),
            Token::Number(_)
            | Token::EndOfLine
            | Token::Delimiter(_)
            | Token::QuotedString(_) => {}
        }
        Ok(None)
    }

    fn keyword(&mut self, keyword: Keyword) -> Result<Option<Event>> {
        use Keyword::*;
        match keyword {
            Print => return self.exec_print().map(Some),
            Input => return self.exec_input().map(Some),
            End => return Ok(Some(self.stop())),
            Goto => self.exec_goto()?,
            Gosub => self.exec_gosub()?,
            Return => self.exec_return()?,
            If => self.exec_if()?,
            For => self.exec_for()?,
            Next => self.exec_next()?,
            Repeat => self.exec_repeat()?,
            Until => self.exec_until()?,
            Then | To => {}
        }
        Ok(None)
    }

    fn expression(&mut self) -> Result<f64> {
        let value = evaluate(&mut self.lex, &self.var)?;
        self.lex.push_back();
        Ok(value)
    }

    fn variable(&mut self) -> Result<usize> {
        match self.lex.next_token()? {
            Token::Variable(name) => Var::index(&name),
            _ => Err(error!(NotAVariable)),
        }
    }

    fn expect_equal(&mut self) -> Result<()> {
        if self.lex.next_token()?.is_delimiter(Delimiter::Equal) {
            Ok(())
        } else {
            Err(error!(EqualSignExpected))
        }
    }

    fn label(&mut self) -> Result<Address> {
        match self.lex.next_token()? {
            Token::Number(label) => match self.labels.get(&label) {
                Some(addr) => Ok(addr),
                None => Err(error!(UndefinedLabel; &label)),
            },
            _ => Err(error!(UndefinedLabel)),
        }
    }

    fn exec_let(&mut self) -> Result<()> {
        let var = self.variable()?;
        self.expect_equal()?;
        let value = self.expression()?;
        self.var.store(var, value);
        Ok(())
    }

    fn exec_print(&mut self) -> Result<Event> {
        let mut s = String::new();
        let mut len = 0;
        let mut separated = false;
        loop {
            let item = match self.lex.next_token()? {
                token if token.is_end() => break,
                Token::QuotedString(text) => text,
                _ => {
                    self.lex.push_back();
                    format_number(self.expression()?)
                }
            };
            len += item.chars().count();
            s.push_str(&item);
            match self.lex.next_token()? {
                Token::Delimiter(Delimiter::Comma) => {
                    let spaces = 8 - len % 8;
                    s.push_str(&" ".repeat(spaces));
                    len += spaces;
                    separated = true;
                }
                Token::Delimiter(Delimiter::Semicolon) => {
                    s.push(' ');
                    len += 1;
                    separated = true;
                }
                token if token.is_end() => {
                    separated = false;
                    break;
                }
                _ => return Err(error!(Syntax)),
            }
        }
        if !separated {
            s.push('\n');
        }
        Ok(Event::Print(s))
    }

    fn exec_input(&mut self) -> Result<Event> {
        let (prompt, token) = match self.lex.next_token()? {
            Token::QuotedString(prompt) => {
                if !self.lex.next_token()?.is_delimiter(Delimiter::Comma) {
                    return Err(error!(Syntax));
                }
                (prompt, self.lex.next_token()?)
            }
            token => ("? ".to_string(), token),
        };
        let var = match token {
            Token::Variable(name) => Var::index(&name)?,
            _ => return Err(error!(NotAVariable)),
        };
        self.state = State::Input(prompt.clone(), var);
        Ok(Event::Input(prompt))
    }

    fn exec_goto(&mut self) -> Result<()> {
        let addr = self.label()?;
        tracing::trace!(addr, "goto");
        self.lex.jump(addr);
        Ok(())
    }

    fn exec_gosub(&mut self) -> Result<()> {
        let addr = self.label()?;
        tracing::trace!(addr, depth = self.return_stack.len(), "gosub");
        self.return_stack.push(self.lex.pc())?;
        self.lex.jump(addr);
        Ok(())
    }

    fn exec_return(&mut self) -> Result<()> {
        let addr = self.return_stack.pop()?;
        tracing::trace!(addr, "return");
        self.lex.jump(addr);
        Ok(())
    }

    fn exec_if(&mut self) -> Result<()> {
        if self.expression()? == 0.0 {
            self.lex.skip_line();
            return Ok(());
        }
        if self.lex.next_token()?.is_keyword(Keyword::Then) {
            Ok(())
        } else {
            Err(error!(ThenExpected))
        }
    }

    fn exec_for(&mut self) -> Result<()> {
        let var = self.variable()?;
        self.expect_equal()?;
        let initial = self.expression()?;
        self.var.store(var, initial);
        if !self.lex.next_token()?.is_keyword(Keyword::To) {
            return Err(error!(ToExpected));
        }
        let target = self.expression()?;
        // The body always runs once; only NEXT compares against the target.
        self.next_stack.push(NextFrame {
            var,
            target,
            addr: self.lex.pc(),
        })
    }

    fn exec_next(&mut self) -> Result<()> {
        if !matches!(self.lex.next_token()?, Token::Variable(_)) {
            self.lex.push_back();
        }
        let frame = self.next_stack.pop()?;
        let value = self.var.fetch(frame.var) + 1.0;
        self.var.store(frame.var, value);
        if value > frame.target {
            return Ok(());
        }
        let addr = frame.addr;
        self.next_stack.push(frame)?;
        self.lex.jump(addr);
        Ok(())
    }

    fn exec_repeat(&mut self) -> Result<()> {
        self.until_stack.push(UntilFrame {
            addr: self.lex.pc(),
        })
    }

    fn exec_until(&mut self) -> Result<()> {
        let frame = self.until_stack.pop()?;
        if self.expression()? != 0.0 {
            return Ok(());
        }
        let addr = frame.addr;
        self.until_stack.push(frame)?;
        self.lex.jump(addr);
        Ok(())
    }
}

/// Shortest decimal that reads back as the same double.
fn format_number(n: f64) -> String {
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_input_parse_failure_leaves_var() {
        let mut r = Runtime::new("A=7\nINPUT A\nPRINT A\n");
        assert!(matches!(r.execute(100), Event::Input(_)));
        r.enter("seven");
        assert!(matches!(r.execute(100), Event::Warning(_)));
        assert_eq!(r.var("A").unwrap(), 7.0);
        match r.execute(100) {
            Event::Print(s) => assert_eq!(s, "7\n"),
            event => panic!("{:?}", event),
        }
        assert!(matches!(r.execute(100), Event::Stopped));
        assert!(r.is_stopped());
    }

    #[test]
    fn test_error_line() {
        let mut r = Runtime::new("10 A=1\n20 B=A/0\n30 END\n");
        match r.execute(100) {
            Event::Error(error) => {
                assert_eq!(error.code(), ErrorCode::DivisionByZero);
                assert_eq!(error.line(), Some(2));
            }
            event => panic!("{:?}", event),
        }
        assert!(matches!(r.execute(100), Event::Stopped));
    }

    #[test]
    fn test_interrupt() {
        let mut r = Runtime::new("10 GOTO 10\n");
        assert!(matches!(r.execute(50), Event::Running));
        r.interrupt();
        assert!(matches!(r.execute(50), Event::Stopped));
    }
}
