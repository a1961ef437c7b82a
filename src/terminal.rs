use std::{io, mem::MaybeUninit, os::fd::AsRawFd};

/// Puts a terminal into unbuffered, no-echo mode until dropped.
///
/// `ISIG` is cleared as well, so Ctrl-C arrives as a byte and the settings are restored on
/// the normal exit path.
pub struct RawTerminal {
    fd: libc::c_int,
    original: libc::termios,
}

impl RawTerminal {
    pub fn enable(fd: &impl AsRawFd) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let mut termios = MaybeUninit::uninit();

        let original = unsafe {
            if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
                return Err(io::Error::last_os_error());
            }

            termios.assume_init()
        };

        let mut raw = original;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG);

        unsafe {
            if libc::tcsetattr(fd, libc::TCSADRAIN, &raw) != 0 {
                return Err(io::Error::last_os_error());
            }
        }

        log::debug!("terminal on fd {fd} switched to raw input");

        Ok(Self { fd, original })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let restored = unsafe { libc::tcsetattr(self.fd, libc::TCSADRAIN, &self.original) };

        if restored != 0 {
            log::warn!(
                "could not restore terminal settings: {}",
                io::Error::last_os_error()
            );
        }
    }
}
