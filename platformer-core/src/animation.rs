//! Frame-advance clock over an externally owned frame table.

/// Drives a cycle of sprite frame indices. The frame table lives in shared
/// read-only data; the clock only borrows it.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock<'a> {
    frames: &'a [u16],
    current: usize,
    timer: u16,
    speed: u16,
    looped: bool,
    finished: bool,
}

impl<'a> AnimationClock<'a> {
    pub const fn new(frames: &'a [u16], speed: u16, looped: bool) -> AnimationClock<'a> {
        AnimationClock {
            frames,
            current: 0,
            timer: 0,
            speed,
            looped,
            finished: false,
        }
    }

    /// Advance one game frame and return the current frame index.
    /// A finished non-looping clock holds its last frame without advancing.
    pub fn update(&mut self) -> u16 {
        if self.frames.is_empty() {
            return 0;
        }

        if self.finished && !self.looped {
            return self.frames[self.current];
        }

        self.timer += 1;
        if self.timer >= self.speed {
            self.timer = 0;
            self.current += 1;

            if self.current >= self.frames.len() {
                if self.looped {
                    self.current = 0;
                } else {
                    self.current = self.frames.len() - 1;
                    self.finished = true;
                }
            }
        }

        self.frames[self.current]
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.timer = 0;
        self.finished = false;
    }

    /// Jump to a frame. Out-of-bounds requests are ignored.
    pub fn set_frame(&mut self, frame: usize) {
        if frame < self.frames.len() {
            self.current = frame;
            self.timer = 0;
            self.finished = false;
        }
    }

    pub fn set_speed(&mut self, speed: u16) {
        self.speed = speed;
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
