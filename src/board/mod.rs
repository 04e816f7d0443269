#[cfg(all(target_arch = "aarch64", feature = "qemu"))]
mod aarch64_qemu;

#[cfg(all(target_arch = "aarch64", feature = "qemu"))]
pub use aarch64_qemu::*;

#[cfg(all(target_arch = "riscv64", feature = "qemu"))]
mod riscv64_qemu;

#[cfg(all(target_arch = "riscv64", feature = "qemu"))]
pub use riscv64_qemu::*;

#[cfg(all(target_arch = "x86_64", feature = "qemu"))]
mod x86_64_qemu;

#[cfg(all(target_arch = "x86_64", feature = "qemu"))]
pub use x86_64_qemu::*;
