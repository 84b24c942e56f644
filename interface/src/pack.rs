use core::mem::MaybeUninit;

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// # Safety
///
/// Implementor must guarantee `pack_into_slice` packs `LEN` bytes.
pub unsafe trait Pack<const LEN: usize>: Sized {
    /// Pack into a buffer of size LEN without zero initializing the buffer, then return the buffer.
    fn pack(&self) -> [u8; LEN] {
        let mut dst = [UNINIT_BYTE; LEN];
        self.pack_into_slice(&mut dst);

        // Safety: All LEN bytes were initialized in `pack_into_slice`.
        unsafe { *(dst.as_ptr() as *const [u8; LEN]) }
    }

    #[doc(hidden)]
    /// Pack into a destination slice of maybe uninitialized bytes of LEN length.
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; LEN]);
}

/// Writes bytes from a source slice into an uninitialized destination buffer.
///
/// This is a safe alternative to `ptr::copy_nonoverlapping` for writing to `MaybeUninit`
/// slices. The compiler optimizes the loop into a memcpy in release builds while keeping
/// compile-time bounds checking on the slice operations.
///
/// Caller must ensure that `src.len()` matches `dst.len()`. A partially written `dst` is not
/// immediate undefined behavior, but will cause UB if the slice pointer is later dereferenced
/// with an insufficiently sized array.
#[inline(always)]
pub fn write_bytes(dst: &mut [MaybeUninit<u8>], src: &[u8]) {
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "tried to `write_bytes` with mismatched src/dst lengths"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.write(*s);
    }
}
