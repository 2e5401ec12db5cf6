//! Uploading shader uniforms.
//!
//! The graphics backend is abstracted behind [`UniformSink`], which accepts
//! named values in the raw layouts graphics APIs expect. Types that can be
//! sent to a sink implement [`Uniform`].

use crate::math::{Mat4, Vec3f};

/// A destination for named shader uniforms, such as a linked shader
/// program.
///
/// Implementations look up the uniform slot by name and upload the value.
/// A name that does not refer to an active uniform should be ignored,
/// as graphics APIs typically do.
pub trait UniformSink {
    /// Sets a 4x4 matrix uniform from its entries in column-major order.
    fn set_mat4(&mut self, name: &str, cols: &[f32; 16]);
    /// Sets a 3-vector uniform.
    fn set_vec3(&mut self, name: &str, v: [f32; 3]);
    /// Sets a scalar uniform.
    fn set_f32(&mut self, name: &str, v: f32);
}

/// Trait for values that can be uploaded as a shader uniform.
pub trait Uniform {
    /// Sends `self` to `sink` as the uniform called `name`.
    fn upload(&self, name: &str, sink: &mut impl UniformSink);
}

impl<S: UniformSink + ?Sized> UniformSink for &mut S {
    fn set_mat4(&mut self, name: &str, cols: &[f32; 16]) {
        (**self).set_mat4(name, cols);
    }
    fn set_vec3(&mut self, name: &str, v: [f32; 3]) {
        (**self).set_vec3(name, v);
    }
    fn set_f32(&mut self, name: &str, v: f32) {
        (**self).set_f32(name, v);
    }
}

impl Uniform for Mat4 {
    /// Uploads the column-major entries of `self`, untransposed.
    fn upload(&self, name: &str, sink: &mut impl UniformSink) {
        sink.set_mat4(name, self.as_array());
    }
}

impl Uniform for Vec3f {
    fn upload(&self, name: &str, sink: &mut impl UniformSink) {
        sink.set_vec3(name, self.to_array());
    }
}

impl Uniform for f32 {
    fn upload(&self, name: &str, sink: &mut impl UniformSink) {
        sink.set_f32(name, *self);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use alloc::{string::String, vec::Vec};

    use crate::math::{translate, vec3};

    use super::*;

    /// A uniform value as received by a sink.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Value {
        Mat4([f32; 16]),
        Vec3([f32; 3]),
        F32(f32),
    }

    /// Sink that records every uniform it receives.
    #[derive(Default)]
    pub struct Recorder(pub Vec<(String, Value)>);

    impl UniformSink for Recorder {
        fn set_mat4(&mut self, name: &str, cols: &[f32; 16]) {
            self.0.push((name.into(), Value::Mat4(*cols)));
        }
        fn set_vec3(&mut self, name: &str, v: [f32; 3]) {
            self.0.push((name.into(), Value::Vec3(v)));
        }
        fn set_f32(&mut self, name: &str, v: f32) {
            self.0.push((name.into(), Value::F32(v)));
        }
    }

    #[test]
    fn matrix_is_uploaded_column_major() {
        let mut rec = Recorder::default();
        translate(vec3(1.0, 2.0, 3.0)).upload("model", &mut rec);

        let [(name, Value::Mat4(cols))] = &rec.0[..] else {
            panic!("unexpected uniforms: {:?}", rec.0);
        };
        assert_eq!(name, "model");
        assert_eq!(cols[12..], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn vectors_and_scalars() {
        let mut rec = Recorder::default();
        vec3(0.5_f32, 1.0, -1.0).upload("light_dir", &mut rec);
        0.25_f32.upload("time", &mut rec);

        assert_eq!(
            rec.0,
            [
                ("light_dir".into(), Value::Vec3([0.5, 1.0, -1.0])),
                ("time".into(), Value::F32(0.25)),
            ]
        );
    }

    #[test]
    fn upload_through_mut_ref() {
        let mut rec = Recorder::default();
        {
            let mut sink = &mut rec;
            1.0_f32.upload("a", &mut sink);
        }
        assert_eq!(rec.0.len(), 1);
    }
}
