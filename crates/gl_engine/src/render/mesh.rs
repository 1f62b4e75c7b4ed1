//! Static geometry upload
//!
//! Uploads vertex data into a GPU-resident buffer and records its layout in a
//! vertex array object. The buffer contents are immutable after upload
//! (`STATIC_DRAW`).

use std::rc::Rc;

use glow::HasContext as _;

use crate::render::{GlContext, RenderError, RenderResult};

/// Layout of a single float vertex attribute.
///
/// The stride may be wider than the attribute: a position packed in a
/// three-float stride with only two components consumed leaves the third
/// float in the buffer but out of the shader's input.
#[derive(Debug, Clone, Copy)]
pub struct AttribLayout {
    /// Shader input slot
    pub location: u32,
    /// Number of floats fed to the attribute per vertex
    pub components: i32,
    /// Distance between consecutive vertices, in floats
    pub stride: i32,
}

/// GPU-resident vertex buffer plus its vertex-array binding descriptor
pub struct StaticMesh {
    gl: Rc<glow::Context>,
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    vertex_count: i32,
    byte_len: usize,
}

impl StaticMesh {
    /// Upload `vertices` and describe them with `layout`.
    pub fn upload(ctx: &GlContext, vertices: &[f32], layout: &AttribLayout) -> RenderResult<Self> {
        let gl = ctx.share();
        let bytes: &[u8] = bytemuck::cast_slice(vertices);

        let vao = unsafe { gl.create_vertex_array() }.map_err(RenderError::Allocation)?;
        let vbo = unsafe { gl.create_buffer() }.map_err(RenderError::Allocation)?;

        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);

            gl.vertex_attrib_pointer_f32(
                layout.location,
                layout.components,
                glow::FLOAT,
                false,
                layout.stride * std::mem::size_of::<f32>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(layout.location);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }

        Ok(Self {
            gl,
            vao,
            vbo,
            vertex_count: vertices.len() as i32 / layout.stride,
            byte_len: bytes.len(),
        })
    }

    /// Bind the vertex array for drawing.
    pub fn bind(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
        }
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    /// Read the buffer back from the GPU, byte for byte.
    ///
    /// Round-trip check used by tests; not part of the frame path.
    pub fn read_back(&self) -> Vec<f32> {
        let mut floats = vec![0.0_f32; self.byte_len / std::mem::size_of::<f32>()];
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            self.gl
                .get_buffer_sub_data(glow::ARRAY_BUFFER, 0, bytemuck::cast_slice_mut(&mut floats));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
        floats
    }
}

impl Drop for StaticMesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}
