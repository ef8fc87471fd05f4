//! Symbol button task
//!
//! One instance per button. Each press is debounced and sent to the
//! decoder task as a single symbol.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use embedded_hal_async::digital::Wait;

use morsetone_core::input::{Debouncer, Symbol};

use crate::channels::{DROPPED_SYMBOLS, SYMBOL_CHANNEL};

/// Wait for the next press (buttons pull the line low)
async fn next_press<P: Wait>(pin: &mut P) -> bool {
    pin.wait_for_falling_edge().await.is_ok()
}

/// Button task
///
/// Presses closer together than `debounce_ms` are treated as contact
/// bounce and ignored. If the decoder falls behind and the channel is
/// full, the symbol is dropped and counted.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, symbol: Symbol, debounce_ms: u32) {
    info!("Button task started for {:?}", symbol);

    let mut debouncer = Debouncer::new(debounce_ms);

    loop {
        if !next_press(&mut pin).await {
            continue;
        }

        let now_ms = Instant::now().as_millis() as u32;
        if !debouncer.accept(now_ms) {
            trace!("Bounce ignored on {:?} button", symbol);
            continue;
        }

        if SYMBOL_CHANNEL.try_send(symbol).is_err() {
            let dropped = DROPPED_SYMBOLS.fetch_add(1, Ordering::Relaxed) + 1;
            warn!("Symbol channel full, dropped {:?} ({} total)", symbol, dropped);
        }
    }
}
