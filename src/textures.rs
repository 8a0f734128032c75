use glam::Vec3;

/// Color lookup over the world-space hit point.
#[derive(Clone, Debug)]
pub enum Texture {
    Uniform(UniformTexture),
    Checker(CheckerTexture),
}

impl Texture {
    pub fn value(&self, point: Vec3) -> Vec3 {
        match self {
            Texture::Uniform(texture) => texture.value(),
            Texture::Checker(texture) => texture.value(point),
        }
    }
}

impl From<Vec3> for Texture {
    fn from(color: Vec3) -> Self {
        Texture::Uniform(UniformTexture::new(color))
    }
}

impl From<UniformTexture> for Texture {
    fn from(texture: UniformTexture) -> Self {
        Texture::Uniform(texture)
    }
}

impl From<CheckerTexture> for Texture {
    fn from(texture: CheckerTexture) -> Self {
        Texture::Checker(texture)
    }
}

/// A texture with a constant uniform color
#[derive(Clone, Debug)]
pub struct UniformTexture {
    color: Vec3,
}

impl UniformTexture {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }

    fn value(&self) -> Vec3 {
        self.color
    }
}

/// Alternates two colors on the sign of a triple sine over position
#[derive(Clone, Debug)]
pub struct CheckerTexture {
    even: Vec3,
    odd: Vec3,
    scale: f32,
}

impl CheckerTexture {
    pub fn new(even: Vec3, odd: Vec3, scale: f32) -> Self {
        Self { even, odd, scale }
    }

    fn value(&self, point: Vec3) -> Vec3 {
        let sines = f32::sin(self.scale * point.x)
            * f32::sin(self.scale * point.y)
            * f32::sin(self.scale * point.z);

        if sines < 0.0 {
            self.odd
        } else {
            self.even
        }
    }
}
