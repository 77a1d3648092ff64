use std::time::Duration;

/// Helper struct to calculate the average and worst time of an operation
pub struct AverageTimeCounter {
    count: u32,
    total: Duration,
    worst: Duration,
}

impl AverageTimeCounter {
    pub fn new() -> Self {
        Self {
            count: 0,
            total: Duration::default(),
            worst: Duration::default(),
        }
    }

    pub fn add_time(&mut self, duration: Duration) {
        self.count += 1;
        self.total += duration;
        self.worst = self.worst.max(duration);
    }

    pub fn average_time_micros(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            (self.total.as_micros() / self.count as u128) as u64
        }
    }

    pub fn worst_time_micros(&self) -> u64 {
        self.worst.as_micros() as u64
    }
}
