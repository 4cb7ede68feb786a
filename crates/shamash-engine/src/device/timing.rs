use std::sync::mpsc;
use std::time::Duration;

/// Bound on the blocking wait for timestamp readback.
///
/// Heavy workloads can keep a single pass busy for a long time; past this
/// bound the frame reports no timing instead of hanging the loop.
const READBACK_TIMEOUT: Duration = Duration::from_secs(2);

/// Measures the duration of one render pass per frame with timestamp queries.
///
/// Construction degrades gracefully: when the device lacks
/// `Features::TIMESTAMP_QUERY`, every read reports `None` and rendering
/// proceeds untimed.
pub struct GpuTimer {
    inner: Option<TimerQueries>,
}

struct TimerQueries {
    query_set: wgpu::QuerySet,
    resolve_buffer: wgpu::Buffer,
    staging_buffer: wgpu::Buffer,
    /// Nanoseconds per timestamp tick, reported by the queue.
    period_ns: f32,
}

impl GpuTimer {
    /// Timestamps written per pass (begin + end).
    const QUERY_COUNT: u32 = 2;

    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        if !device.features().contains(wgpu::Features::TIMESTAMP_QUERY) {
            log::debug!("timestamp queries unsupported on this device; pass timing disabled");
            return Self { inner: None };
        }

        let query_set = device.create_query_set(&wgpu::QuerySetDescriptor {
            label: Some("shamash pass timer queries"),
            ty: wgpu::QueryType::Timestamp,
            count: Self::QUERY_COUNT,
        });

        let size = u64::from(Self::QUERY_COUNT) * 8;
        let resolve_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shamash pass timer resolve"),
            size,
            usage: wgpu::BufferUsages::QUERY_RESOLVE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });
        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shamash pass timer staging"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            inner: Some(TimerQueries {
                query_set,
                resolve_buffer,
                staging_buffer,
                period_ns: queue.get_timestamp_period(),
            }),
        }
    }

    /// Timestamp writes to attach to the timed render pass.
    pub fn timestamp_writes(&self) -> Option<wgpu::RenderPassTimestampWrites<'_>> {
        self.inner.as_ref().map(|q| wgpu::RenderPassTimestampWrites {
            query_set: &q.query_set,
            beginning_of_pass_write_index: Some(0),
            end_of_pass_write_index: Some(1),
        })
    }

    /// Resolves the pass timestamps into the readback chain.
    ///
    /// Record this after the timed pass has ended and before submission.
    pub fn resolve(&self, encoder: &mut wgpu::CommandEncoder) {
        let Some(q) = self.inner.as_ref() else { return };
        encoder.resolve_query_set(&q.query_set, 0..Self::QUERY_COUNT, &q.resolve_buffer, 0);
        encoder.copy_buffer_to_buffer(
            &q.resolve_buffer,
            0,
            &q.staging_buffer,
            0,
            q.resolve_buffer.size(),
        );
    }

    /// Reads back the elapsed pass time in milliseconds.
    ///
    /// Blocks until the submitted work completes, bounded by
    /// [`READBACK_TIMEOUT`]. Returns `None` when timing is unavailable, the
    /// wait expires, or the driver hands back a non-monotonic pair.
    pub fn read_elapsed_ms(&self, device: &wgpu::Device) -> Option<f64> {
        let q = self.inner.as_ref()?;

        let slice = q.staging_buffer.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        let _ = device.poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: Some(READBACK_TIMEOUT),
        });

        match rx.try_recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                log::warn!("timestamp readback failed: {e}");
                return None;
            }
            Err(_) => {
                // The map did not complete within the bound; cancel it so
                // the buffer is usable again next frame.
                log::warn!("timestamp readback timed out after {READBACK_TIMEOUT:?}");
                q.staging_buffer.unmap();
                return None;
            }
        }

        let elapsed = {
            let data = slice.get_mapped_range();
            let ticks: &[u64] = bytemuck::cast_slice(&data);
            ticks_to_ms(ticks[0], ticks[1], q.period_ns)
        };
        q.staging_buffer.unmap();

        elapsed
    }
}

/// Converts a begin/end timestamp pair into milliseconds.
///
/// Returns `None` for a non-monotonic pair, which some drivers produce
/// around power-state transitions.
fn ticks_to_ms(begin: u64, end: u64, period_ns: f32) -> Option<f64> {
    let delta = end.checked_sub(begin)?;
    Some(delta as f64 * f64::from(period_ns) / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_scales_by_the_tick_period() {
        // 1000 ticks at 1ns each is one microsecond.
        assert_eq!(ticks_to_ms(0, 1000, 1.0), Some(0.001));
        assert_eq!(ticks_to_ms(0, 1000, 2.0), Some(0.002));
    }

    #[test]
    fn identical_timestamps_are_zero_elapsed() {
        assert_eq!(ticks_to_ms(500, 500, 1.0), Some(0.0));
    }

    #[test]
    fn non_monotonic_pair_is_rejected() {
        assert_eq!(ticks_to_ms(1000, 999, 1.0), None);
    }
}
