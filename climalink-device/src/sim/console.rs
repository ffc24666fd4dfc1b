//! Serial link over the process's standard streams

use std::io::{self, Read, Stdin, Stdout, Write};
use std::thread;

use climalink_hal::{UartRx, UartTx};

use crate::channels::{LinkEvent, LINK_RX};

/// Transmit side on stdout
pub struct StdoutUart {
    out: Stdout,
    newline: bool,
}

impl StdoutUart {
    /// `newline` terminates every write with `\n` for terminal use
    pub fn new(newline: bool) -> Self {
        Self {
            out: io::stdout(),
            newline,
        }
    }
}

impl UartTx for StdoutUart {
    type Error = io::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut out = self.out.lock();
        out.write_all(data)?;
        if self.newline {
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.out.flush()
    }
}

/// Receive side on stdin
pub struct StdinUart {
    input: Stdin,
}

impl StdinUart {
    pub fn new() -> Self {
        Self { input: io::stdin() }
    }
}

impl Default for StdinUart {
    fn default() -> Self {
        Self::new()
    }
}

impl UartRx for StdinUart {
    type Error = io::Error;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.input.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

/// Pump bytes from `rx` into [`LINK_RX`] on a dedicated thread
///
/// Blocking reads cannot run on the executor thread. The pump ends with
/// [`LinkEvent::Closed`] at end of input or on a read error.
pub fn spawn_stdin_reader<R>(mut rx: R) -> io::Result<thread::JoinHandle<()>>
where
    R: UartRx + Send + 'static,
{
    thread::Builder::new()
        .name("link-rx".into())
        .spawn(move || {
            loop {
                match rx.read_byte() {
                    Ok(Some(byte)) => {
                        embassy_futures::block_on(LINK_RX.send(LinkEvent::Byte(byte)));
                    }
                    Ok(None) => {
                        log::info!("link closed");
                        break;
                    }
                    Err(e) => {
                        log::error!("link read failed: {:?}", e);
                        break;
                    }
                }
            }
            embassy_futures::block_on(LINK_RX.send(LinkEvent::Closed));
        })
}
