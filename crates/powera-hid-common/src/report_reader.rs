//! HID report parsing utilities

use crate::{HidCommonError, HidCommonResult};

/// Cursor over a borrowed report buffer.
///
/// Every read is bounds-checked against the buffer length and fails with
/// [`HidCommonError::UnexpectedEnd`] instead of indexing past it. Reading never
/// allocates, so the reader is usable inside a non-sleeping critical section.
#[derive(Debug, Clone, Copy)]
pub struct ReportReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ReportReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    fn end_error(&self) -> HidCommonError {
        HidCommonError::UnexpectedEnd {
            offset: self.position,
            len: self.buffer.len(),
        }
    }

    /// Byte at the cursor, without advancing.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::UnexpectedEnd`] if the cursor is at the end.
    pub fn peek_u8(&self) -> HidCommonResult<u8> {
        self.buffer
            .get(self.position)
            .copied()
            .ok_or_else(|| self.end_error())
    }

    /// # Errors
    ///
    /// Returns [`HidCommonError::UnexpectedEnd`] if the cursor is at the end.
    pub fn read_u8(&mut self) -> HidCommonResult<u8> {
        let value = self.peek_u8()?;
        self.position = self.position.saturating_add(1);
        Ok(value)
    }

    /// # Errors
    ///
    /// Returns [`HidCommonError::UnexpectedEnd`] if fewer than two bytes
    /// remain. The cursor does not move in that case.
    pub fn read_u16_le(&mut self) -> HidCommonResult<u16> {
        self.read_array::<2>().map(u16::from_le_bytes)
    }

    /// Read `N` bytes into a stack array.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::UnexpectedEnd`] if fewer than `N` bytes
    /// remain. The cursor does not move in that case.
    pub fn read_array<const N: usize>(&mut self) -> HidCommonResult<[u8; N]> {
        let end = self
            .position
            .checked_add(N)
            .ok_or_else(|| self.end_error())?;
        let bytes = self
            .buffer
            .get(self.position..end)
            .ok_or_else(|| self.end_error())?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.position = end;
        Ok(out)
    }
}

/// Growable report writer, used to build synthetic reports.
pub struct ReportBuilder {
    buffer: Vec<u8>,
}

impl ReportBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}
