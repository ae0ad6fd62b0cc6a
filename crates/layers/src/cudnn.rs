//! cuDNN-backed implementations of the engine-selecting families.

use brew_proto::Engine;

define_layer!(pub struct CudnnConvolutionLayer, engine: Engine::Cudnn);
define_layer!(pub struct CudnnPoolingLayer, engine: Engine::Cudnn);
define_layer!(pub struct CudnnReluLayer, engine: Engine::Cudnn);
define_layer!(pub struct CudnnSigmoidLayer, engine: Engine::Cudnn);
define_layer!(pub struct CudnnSoftmaxLayer, engine: Engine::Cudnn);
define_layer!(pub struct CudnnTanhLayer, engine: Engine::Cudnn);
